// src/gui/app.rs
use std::error::Error;

use eframe::egui;
use tracing::{error, info};

use crate::{
    catalog::Field,
    config::state::AppState,
    session::{Action, Notice, Session},
};

use super::{components, textures::TextureCache};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Explorador de Productos",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

/// Selector values, computed once per loaded catalog.
#[derive(Clone, Debug, Default)]
pub struct Choices {
    pub brands: Vec<String>,
    pub skin_types: Vec<String>,
    pub applications: Vec<String>,
    pub cruelty_free: Vec<String>,
    /// Slider upper bound (max catalog price, rounded up).
    pub price_ceiling: f64,
}

impl Choices {
    fn from_session(session: &Session) -> Self {
        Self {
            brands: session.choices(Field::Brand),
            skin_types: session.choices(Field::SkinType),
            applications: session.choices(Field::Application),
            cruelty_free: session.choices(Field::CrueltyFree),
            price_ceiling: session.catalog().max_price().unwrap_or(0.0).ceil(),
        }
    }
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    /// `None` when the catalog failed to load; `load_error` says why.
    pub session: Option<Session>,
    pub load_error: Option<String>,

    pub choices: Choices,
    pub textures: TextureCache,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        match Session::open(state.options.clone()) {
            Ok(session) => {
                let choices = Choices::from_session(&session);
                state.gui.price_min = 0.0;
                state.gui.price_max = choices.price_ceiling;
                state.gui.status = format!("{} productos cargados", session.catalog().len());
                info!(
                    brands = choices.brands.len(),
                    price_ceiling = choices.price_ceiling,
                    "GUI ready"
                );

                let mut app = Self {
                    state,
                    session: Some(session),
                    load_error: None,
                    choices,
                    textures: TextureCache::default(),
                };
                app.push_price_range();
                app
            }
            Err(e) => {
                error!("catalog load failed: {e}");
                state.gui.status = s!("Error al cargar el catálogo");
                Self {
                    state,
                    session: None,
                    load_error: Some(e.to_string()),
                    choices: Choices::default(),
                    textures: TextureCache::default(),
                }
            }
        }
    }

    /// Apply one user action and surface its acknowledgment.
    pub fn dispatch(&mut self, action: Action) {
        let Some(session) = self.session.as_mut() else { return };
        match session.dispatch(action) {
            Notice::None => {}
            Notice::Success(msg) | Notice::Info(msg) => self.state.gui.status = msg,
        }
    }

    /// Slider positions → session criteria.
    pub fn push_price_range(&mut self) {
        let (min, max) = (self.state.gui.price_min, self.state.gui.price_max);
        self.dispatch(Action::SetPriceRange { min, max });
    }

    /// Back to "Todos" everywhere and the full price range.
    pub fn reset_filters(&mut self) {
        self.dispatch(Action::ResetFilters);
        self.state.gui.price_min = 0.0;
        self.state.gui.price_max = self.choices.price_ceiling;
        self.push_price_range();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Explorador de Productos");
                ui.separator();
                ui.label(self.state.gui.status.as_str());
            });
        });

        if let Some(err) = self.load_error.clone() {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.colored_label(ui.visuals().error_fg_color, "No se pudo cargar el catálogo");
                ui.label(err);
                ui.label(format!("Archivo: {}", self.state.options.catalog.display()));
            });
            return;
        }

        egui::SidePanel::left("filters")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                components::filter_panel::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("comparison")
            .resizable(true)
            .default_height(220.0)
            .show(ctx, |ui| {
                components::comparison::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::product_list::draw(ui, self);
        });
    }
}
