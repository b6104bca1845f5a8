// src/compare.rs
//
// Side-by-side comparison of the selected products.
//
// Rows: every catalog row whose name is in the selection, catalog order.
// Name is the key, so rows sharing a selected name all show up.

use crate::catalog::{Catalog, Field, Product};
use crate::config::options::Variant;
use crate::selection::SelectionStore;

/// Projected comparison table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonTable {
    pub fields: Vec<Field>,
    pub rows: Vec<Vec<String>>,
}

impl ComparisonTable {
    pub fn headers(&self) -> Vec<String> {
        self.fields.iter().map(|f| s!(f.label())).collect()
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Names in row order.
    pub fn names(&self) -> Vec<&str> {
        self.rows.iter().filter_map(|r| r.first().map(String::as_str)).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Comparison {
    /// Nothing selected, or nothing selected exists in the catalog.
    Empty,
    Table(ComparisonTable),
}

impl Comparison {
    pub fn is_empty(&self) -> bool { matches!(self, Comparison::Empty) }

    pub fn table(&self) -> Option<&ComparisonTable> {
        match self {
            Comparison::Empty => None,
            Comparison::Table(t) => Some(t),
        }
    }
}

/// Fixed column set of the comparison for `variant`.
pub fn columns(variant: Variant) -> Vec<Field> {
    let mut cols = vec![Field::Name, Field::Price, Field::SkinType, Field::LongTermEffect];
    if variant.exposes_cruelty_free() {
        cols.push(Field::CrueltyFree);
    }
    cols
}

fn project(p: &Product, fields: &[Field]) -> Vec<String> {
    fields.iter().map(|f| s!(p.get(*f).unwrap_or_default())).collect()
}

pub fn build(catalog: &Catalog, selection: &SelectionStore) -> Comparison {
    if selection.is_empty() {
        return Comparison::Empty;
    }

    let fields = columns(catalog.variant());
    let rows: Vec<Vec<String>> = catalog
        .products()
        .iter()
        .filter(|p| selection.contains(&p.name))
        .map(|p| project(p, &fields))
        .collect();

    if rows.is_empty() {
        return Comparison::Empty;
    }
    Comparison::Table(ComparisonTable { fields, rows })
}
