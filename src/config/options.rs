// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::csv::Delim;

/// Which flavour of the explorer is running.
///
/// `Basic` shows the core columns only. `Extended` adds the cruelty-free
/// filter and comparison column, product pictures and the optional
/// volume/texture/vegan fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Variant {
    Basic,
    #[default]
    Extended,
}

impl Variant {
    pub fn exposes_cruelty_free(self) -> bool { matches!(self, Variant::Extended) }
    pub fn shows_images(self) -> bool { matches!(self, Variant::Extended) }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub catalog: PathBuf,
    pub image_dir: PathBuf,
    /// Explicit separator; `None` → guessed from the catalog extension.
    pub delimiter: Option<Delim>,
    pub variant: Variant,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from(DEFAULT_CATALOG),
            image_dir: PathBuf::from(DEFAULT_IMAGE_DIR),
            delimiter: None,
            variant: Variant::default(),
            export: ExportOptions::default(),
        }
    }
}

impl AppOptions {
    pub fn with_catalog(mut self, path: impl AsRef<Path>) -> Self {
        self.catalog = path.as_ref().to_path_buf();
        self
    }

    pub fn delim(&self) -> Delim {
        self.delimiter.unwrap_or_else(|| Delim::from_path(&self.catalog))
    }
}

/// How tables leave the app (clipboard / file).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: Delim,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { format: Delim::Tsv, include_headers: true }
    }
}
