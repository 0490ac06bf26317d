pub(crate) mod annotate;
