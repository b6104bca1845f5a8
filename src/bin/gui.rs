// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use skin_explorer::{config::state::AppState, gui, log};
use eframe::egui::ViewportBuilder;

fn main() {
    log::init_file();

    // Optional first argument: catalog path
    let mut state = AppState::default();
    if let Some(path) = std::env::args_os().nth(1) {
        state.options = state.options.with_catalog(path);
    }

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([state.gui.window_w, state.gui.window_h])
            .with_title("Explorador de Productos"),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
