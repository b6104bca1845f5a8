// src/store.rs
//
// Raw catalog table: normalized headers + cells exactly as read.
// Column resolution and typing happen in catalog.rs.

use std::{fs, path::Path};

use tracing::debug;

use crate::csv::{parse_rows, Delim};
use crate::error::CatalogError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize { self.rows.len() }

    /// Position of a (normalized) header.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Trim surrounding whitespace and lowercase. Non-ASCII letters fold too
/// (`"Aplicación "` → `"aplicación"`).
pub fn normalize_header(h: &str) -> String {
    h.trim().to_lowercase()
}

/// Read and parse a catalog file. Values are left untouched; only headers
/// are normalized.
pub fn load_dataset(path: &Path, delim: Delim) -> Result<DataSet, CatalogError> {
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    dataset_from_text(&text, delim, path)
}

/// Parse already-read text. `origin` only labels errors.
pub fn dataset_from_text(text: &str, delim: Delim, origin: &Path) -> Result<DataSet, CatalogError> {
    let mut rows = parse_rows(text, delim.sep())
        .map_err(|e| CatalogError::malformed(origin, e.to_string()))?;

    if rows.is_empty() {
        return Err(CatalogError::malformed(origin, "no header row"));
    }
    let headers: Vec<String> = rows.remove(0).iter().map(|h| normalize_header(h)).collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(CatalogError::malformed(origin, "header row is empty"));
    }

    let width = headers.len();
    for (i, row) in rows.iter_mut().enumerate() {
        if row.len() > width {
            return Err(CatalogError::malformed(
                origin,
                format!("data row {} has {} fields, header has {}", i + 1, row.len(), width),
            ));
        }
        // Missing trailing cells are empty values
        row.resize(width, s!());
    }

    debug!(rows = rows.len(), columns = width, "parsed {}", origin.display());
    Ok(DataSet { headers, rows })
}
