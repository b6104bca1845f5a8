// src/selection.rs
//
// Products marked for comparison, by name. One store per session; it is
// owned by `Session` and handed out by reference, never shared globally.

/// Outcome of `SelectionStore::add`. Both variants are a success.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Added {
    Inserted,
    AlreadyPresent,
}

/// Ordered set of product names: insertion order, no duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionStore {
    names: Vec<String>,
}

impl SelectionStore {
    pub fn new() -> Self { Self::default() }

    /// Append `name` unless it is already a member. Names are not checked
    /// against the catalog.
    pub fn add(&mut self, name: impl Into<String>) -> Added {
        let name = name.into();
        if self.contains(&name) {
            return Added::AlreadyPresent;
        }
        self.names.push(name);
        Added::Inserted
    }

    pub fn clear(&mut self) { self.names.clear(); }

    /// Current members in insertion order.
    pub fn members(&self) -> &[String] { &self.names }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize { self.names.len() }
    pub fn is_empty(&self) -> bool { self.names.is_empty() }
}
