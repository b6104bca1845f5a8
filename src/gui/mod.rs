// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod textures;

pub use app::run;
