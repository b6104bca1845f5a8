// src/filter.rs
//
// Filter engine: a pure function of (catalog, criteria).
//
// The result is a zero-copy view holding row indices into the catalog, in
// source order. Rendering code only iterates the view.

use crate::catalog::{Catalog, Field, Product};

/// Inclusive price interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max { Self { min, max } } else { Self { min: max, max: min } }
    }

    /// `[-inf, +inf]`: every defined price is inside.
    pub fn unbounded() -> Self {
        Self { min: f64::NEG_INFINITY, max: f64::INFINITY }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min == f64::NEG_INFINITY && self.max == f64::INFINITY
    }

    pub fn contains(&self, v: f64) -> bool {
        self.min <= v && v <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self { Self::unbounded() }
}

/// Snapshot of the filter controls. `None` = "Todos" (no constraint).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterCriteria {
    pub brand: Option<String>,
    pub skin_type: Option<String>,
    pub application: Option<String>,
    pub cruelty_free: Option<String>,
    pub price: PriceRange,
}

impl FilterCriteria {
    /// Everything unset: the whole catalog passes.
    pub fn unbounded() -> Self { Self::default() }

    pub fn with_brand(mut self, v: impl Into<String>) -> Self {
        self.brand = Some(v.into());
        self
    }

    pub fn with_skin_type(mut self, v: impl Into<String>) -> Self {
        self.skin_type = Some(v.into());
        self
    }

    pub fn with_application(mut self, v: impl Into<String>) -> Self {
        self.application = Some(v.into());
        self
    }

    pub fn with_cruelty_free(mut self, v: impl Into<String>) -> Self {
        self.cruelty_free = Some(v.into());
        self
    }

    pub fn with_price(mut self, min: f64, max: f64) -> Self {
        self.price = PriceRange::new(min, max);
        self
    }

    /// Per-row predicate; all set criteria must hold.
    ///
    /// A product with no price value only passes the unbounded range. Any
    /// bounded range excludes it.
    pub fn matches(&self, p: &Product) -> bool {
        fn eq(want: &Option<String>, have: Option<&str>) -> bool {
            match want {
                None => true,
                Some(w) => have == Some(w.as_str()),
            }
        }

        eq(&self.brand, Some(p.brand.as_str()))
            && eq(&self.skin_type, Some(p.skin_type.as_str()))
            && eq(&self.application, Some(p.application.as_str()))
            && eq(&self.cruelty_free, p.cruelty_free.as_deref())
            && match p.price_value() {
                Some(v) => self.price.contains(v),
                None => self.price.is_unbounded(),
            }
    }
}

/// Filtered rows of a catalog, by index.
#[derive(Clone, Debug)]
pub struct FilteredView<'a> {
    pub row_ix: Vec<usize>,
    catalog: &'a Catalog,
}

impl<'a> FilteredView<'a> {
    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a product by position in the view.
    pub fn get(&self, i: usize) -> Option<&'a Product> {
        let catalog = self.catalog;
        self.row_ix.get(i).and_then(|&ix| catalog.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Product> + '_ {
        let catalog = self.catalog;
        self.row_ix.iter().filter_map(move |&ix| catalog.get(ix))
    }

    /// Owned copies, for export boundaries.
    pub fn to_owned_products(&self) -> Vec<Product> {
        self.iter().cloned().collect()
    }
}

/// Run the filter pass. Stable: output keeps catalog order.
pub fn apply<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> FilteredView<'a> {
    let row_ix = catalog
        .products()
        .iter()
        .enumerate()
        .filter(|(_, p)| criteria.matches(p))
        .map(|(i, _)| i)
        .collect();
    FilteredView { row_ix, catalog }
}

/// Distinct non-empty values of a column, first-seen order. Feeds the
/// selectors (the presentation layer prepends "Todos").
pub fn choices(catalog: &Catalog, field: Field) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for p in catalog.products() {
        if let Some(v) = p.get(field) {
            if v.trim().is_empty() { continue; }
            if !out.iter().any(|o| o == v) {
                out.push(s!(v));
            }
        }
    }
    out
}
