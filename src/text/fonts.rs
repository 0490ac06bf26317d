use std::{path::Path, sync::Arc};

use anyhow::Context as _;

use crate::foundation::error::{PixgenError, PixgenResult};

/// Font faces loaded once and shared read-only by every rasterization.
#[derive(Clone)]
pub struct FontBook {
    db: Arc<usvg::fontdb::Database>,
    family: Option<String>,
}

impl std::fmt::Debug for FontBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontBook")
            .field("faces", &self.db.len())
            .field("family", &self.family)
            .finish()
    }
}

impl FontBook {
    /// A book with no faces. Drawing text with it fails.
    pub fn empty() -> Self {
        Self {
            db: Arc::new(usvg::fontdb::Database::new()),
            family: None,
        }
    }

    /// Faces installed on the host.
    pub fn system() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts");
        Self {
            family: None,
            db: Arc::new(db),
        }
    }

    /// Parse TrueType/OpenType bytes; the first face's family becomes the default family.
    pub fn from_bytes(bytes: Vec<u8>) -> PixgenResult<Self> {
        let mut db = usvg::fontdb::Database::new();
        db.load_font_data(bytes);
        Self::from_loaded(db, "font bytes")
    }

    /// Load a single font file.
    pub fn from_file(path: &Path) -> PixgenResult<Self> {
        let mut db = usvg::fontdb::Database::new();
        db.load_font_file(path)
            .with_context(|| format!("read font file '{}'", path.display()))?;
        Self::from_loaded(db, &path.display().to_string())
    }

    fn from_loaded(db: usvg::fontdb::Database, what: &str) -> PixgenResult<Self> {
        let family = db
            .faces()
            .next()
            .and_then(|face| face.families.first())
            .map(|(name, _)| name.clone())
            .ok_or_else(|| PixgenError::font(format!("no usable font face in {what}")))?;
        tracing::debug!(faces = db.len(), family = %family, "loaded font");
        Ok(Self {
            db: Arc::new(db),
            family: Some(family),
        })
    }

    /// Number of loaded faces.
    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    /// Family used when a run does not request one.
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    pub(crate) fn database(&self) -> Arc<usvg::fontdb::Database> {
        Arc::clone(&self.db)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/fonts.rs"]
mod tests;
