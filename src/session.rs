// src/session.rs
//
// One interactive session: the loaded catalog, the current filter snapshot
// and the comparison selection. Every user control maps to one `Action`;
// `dispatch` applies it and returns what to tell the user.

use tracing::{debug, info};

use crate::catalog::{Catalog, Field};
use crate::compare::{self, Comparison};
use crate::config::consts::ALL_LABEL;
use crate::config::options::AppOptions;
use crate::error::CatalogError;
use crate::filter::{self, FilterCriteria, FilteredView, PriceRange};
use crate::selection::{Added, SelectionStore};

/// A selector value: the "Todos" sentinel or a real column value.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Choice {
    #[default]
    All,
    Value(String),
}

impl Choice {
    /// Selector label → choice. Only the exact `ALL_LABEL` is the sentinel.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_LABEL {
            Choice::All
        } else {
            Choice::Value(s!(label))
        }
    }

    /// Like `from_label`, but a label that is a real column value always
    /// filters on it, even when it reads like the sentinel.
    pub fn resolve(label: &str, values: &[String]) -> Self {
        if values.iter().any(|v| v == label) {
            Choice::Value(s!(label))
        } else {
            Choice::from_label(label)
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Choice::All => ALL_LABEL,
            Choice::Value(v) => v,
        }
    }

    fn into_option(self) -> Option<String> {
        match self {
            Choice::All => None,
            Choice::Value(v) => Some(v),
        }
    }
}

/// User controls.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SelectBrand(Choice),
    SelectSkinType(Choice),
    SelectApplication(Choice),
    SelectCrueltyFree(Choice),
    SetPriceRange { min: f64, max: f64 },
    SelectForComparison(String),
    ClearComparison,
    ResetFilters,
}

/// Acknowledgment for the user after an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    None,
    Success(String),
    Info(String),
}

impl Notice {
    pub fn text(&self) -> Option<&str> {
        match self {
            Notice::None => None,
            Notice::Success(s) | Notice::Info(s) => Some(s),
        }
    }
}

pub struct Session {
    options: AppOptions,
    catalog: Catalog,
    criteria: FilterCriteria,
    selection: SelectionStore,
}

impl Session {
    /// Load the catalog named in `options` and start with no filters.
    pub fn open(options: AppOptions) -> Result<Self, CatalogError> {
        let catalog = Catalog::load(&options)?;
        Ok(Self::new(options, catalog))
    }

    /// The catalog's variant wins over `options.variant`.
    pub fn new(mut options: AppOptions, catalog: Catalog) -> Self {
        if options.variant != catalog.variant() {
            debug!(options = ?options.variant, catalog = ?catalog.variant(), "variant taken from catalog");
            options.variant = catalog.variant();
        }
        Self {
            options,
            catalog,
            criteria: FilterCriteria::unbounded(),
            selection: SelectionStore::new(),
        }
    }

    pub fn options(&self) -> &AppOptions { &self.options }
    pub fn catalog(&self) -> &Catalog { &self.catalog }
    pub fn criteria(&self) -> &FilterCriteria { &self.criteria }
    pub fn selection(&self) -> &SelectionStore { &self.selection }

    /// Selector entries for a column: values only, without the sentinel.
    pub fn choices(&self, field: Field) -> Vec<String> {
        filter::choices(&self.catalog, field)
    }

    /// Rows matching the current criteria.
    pub fn visible(&self) -> FilteredView<'_> {
        filter::apply(&self.catalog, &self.criteria)
    }

    pub fn comparison(&self) -> Comparison {
        compare::build(&self.catalog, &self.selection)
    }

    pub fn dispatch(&mut self, action: Action) -> Notice {
        debug!(?action, "dispatch");
        match action {
            Action::SelectBrand(c) => {
                self.criteria.brand = c.into_option();
                Notice::None
            }
            Action::SelectSkinType(c) => {
                self.criteria.skin_type = c.into_option();
                Notice::None
            }
            Action::SelectApplication(c) => {
                self.criteria.application = c.into_option();
                Notice::None
            }
            Action::SelectCrueltyFree(c) => {
                if !self.catalog.variant().exposes_cruelty_free() {
                    debug!("cruelty-free filter not available in this variant");
                    return Notice::None;
                }
                self.criteria.cruelty_free = c.into_option();
                Notice::None
            }
            Action::SetPriceRange { min, max } => {
                self.criteria.price = PriceRange::new(min, max);
                Notice::None
            }
            Action::SelectForComparison(name) => {
                let msg = format!("{name} añadido para comparar.");
                match self.selection.add(name) {
                    Added::Inserted => info!(selected = self.selection.len(), "added to comparison"),
                    Added::AlreadyPresent => debug!("already selected"),
                }
                Notice::Success(msg)
            }
            Action::ClearComparison => {
                self.selection.clear();
                info!("comparison cleared");
                Notice::Info(s!("Selección limpiada."))
            }
            Action::ResetFilters => {
                self.criteria = FilterCriteria::unbounded();
                Notice::None
            }
        }
    }
}
