// src/config/consts.rs

// Catalog
pub const DEFAULT_CATALOG: &str = "basedatos.csv";
pub const DEFAULT_IMAGE_DIR: &str = "imagenes";

// Filter selectors: label of the "no constraint" entry
pub const ALL_LABEL: &str = "Todos";

// Local state (GUI log file lives here)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// GUI
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 760.0;
pub const CARD_IMAGE_MAX_W: f32 = 160.0;

// Empty states
pub const MSG_NO_MATCHES: &str = "No se encontraron productos con los filtros seleccionados.";
pub const MSG_NO_COMPARISON: &str = "No hay productos seleccionados para comparar.";
