// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod log;

pub mod csv;
pub mod price;
pub mod store;
pub mod catalog;
pub mod filter;
pub mod selection;
pub mod compare;
pub mod session;

pub mod export;
pub mod gui;
pub mod images;

pub use catalog::{Catalog, Field, Product};
pub use error::CatalogError;
pub use session::{Action, Choice, Notice, Session};
