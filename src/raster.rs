pub(crate) mod canvas;
pub(crate) mod composite;
pub(crate) mod resample;
pub(crate) mod rotate;
pub(crate) mod shapes;
pub(crate) mod warp;
