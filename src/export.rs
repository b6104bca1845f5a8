// src/export.rs
//
// Tables leaving the app: clipboard text and files.

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::catalog::{Field, Product};
use crate::compare::ComparisonTable;
use crate::config::options::{ExportOptions, Variant};
use crate::csv::rows_to_string;

/// Columns of the product listing for `variant`.
pub fn listing_columns(variant: Variant) -> Vec<Field> {
    let mut cols = vec![
        Field::Name, Field::Brand, Field::Category, Field::Price,
        Field::SkinType, Field::Application, Field::LongTermEffect,
    ];
    if variant.exposes_cruelty_free() {
        cols.extend([Field::CrueltyFree, Field::Volume, Field::Texture, Field::Vegan]);
    }
    cols.push(Field::Link);
    cols
}

pub fn comparison_to_string(table: &ComparisonTable, export: &ExportOptions) -> String {
    let headers = table.headers();
    let headers = export.include_headers.then_some(headers.as_slice());
    rows_to_string(headers, &table.rows, export.format.sep())
}

pub fn products_to_string<'a, I>(products: I, variant: Variant, export: &ExportOptions) -> String
where
    I: IntoIterator<Item = &'a Product>,
{
    let fields = listing_columns(variant);
    let headers: Vec<String> = fields.iter().map(|f| s!(f.label())).collect();
    let rows: Vec<Vec<String>> = products
        .into_iter()
        .map(|p| fields.iter().map(|f| s!(p.get(*f).unwrap_or_default())).collect())
        .collect();
    let headers = export.include_headers.then_some(headers.as_slice());
    rows_to_string(headers, &rows, export.format.sep())
}

/// Write `contents` to `path`, creating parent directories.
pub fn write_file(path: &Path, contents: &str) -> io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    info!("wrote {}", path.display());
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
