// src/gui/components/mod.rs
pub mod comparison;
pub mod filter_panel;
pub mod product_list;
