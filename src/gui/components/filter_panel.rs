// src/gui/components/filter_panel.rs
//
// Left sidebar: one selector per filter plus the price sliders. Each
// change becomes exactly one session action.

use eframe::egui;
use tracing::debug;

use crate::config::consts::ALL_LABEL;
use crate::gui::app::App;
use crate::session::{Action, Choice};

/// Combo box with "Todos" first. Returns the new choice if the user picked one.
fn selector(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    values: &[String],
    current: Option<&str>,
) -> Option<Choice> {
    let mut picked = None;
    ui.label(label);
    egui::ComboBox::from_id_salt(id)
        .selected_text(current.unwrap_or(ALL_LABEL))
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            if ui.selectable_label(current.is_none(), ALL_LABEL).clicked() {
                picked = Some(Choice::All);
            }
            for v in values {
                if ui.selectable_label(current == Some(v.as_str()), v.as_str()).clicked() {
                    picked = Some(Choice::Value(v.clone()));
                }
            }
        });
    ui.add_space(6.0);
    picked
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filtros");
    ui.separator();

    let Some(session) = app.session.as_ref() else { return };
    let criteria = session.criteria().clone();
    let show_cruelty = session.options().variant.exposes_cruelty_free();

    let mut actions: Vec<Action> = Vec::new();
    let choices = &app.choices;

    if let Some(c) = selector(ui, "brand", "Seleccionar marca", &choices.brands, criteria.brand.as_deref()) {
        actions.push(Action::SelectBrand(c));
    }
    if let Some(c) = selector(ui, "skin", "Seleccionar tipo de piel", &choices.skin_types, criteria.skin_type.as_deref()) {
        actions.push(Action::SelectSkinType(c));
    }
    if let Some(c) = selector(ui, "application", "Seleccionar aplicación", &choices.applications, criteria.application.as_deref()) {
        actions.push(Action::SelectApplication(c));
    }
    if show_cruelty {
        if let Some(c) = selector(ui, "cruelty", "¿Libre de crueldad?", &choices.cruelty_free, criteria.cruelty_free.as_deref()) {
            actions.push(Action::SelectCrueltyFree(c));
        }
    }

    ui.label("Seleccionar rango de precio");
    let ceiling = choices.price_ceiling.max(1.0);
    let gui = &mut app.state.gui;
    let mut price_changed = false;
    price_changed |= ui
        .add(egui::Slider::new(&mut gui.price_min, 0.0..=ceiling).text("mín").integer())
        .changed();
    price_changed |= ui
        .add(egui::Slider::new(&mut gui.price_max, 0.0..=ceiling).text("máx").integer())
        .changed();
    if gui.price_min > gui.price_max {
        std::mem::swap(&mut gui.price_min, &mut gui.price_max);
    }

    ui.add_space(10.0);
    let reset = ui.button("Quitar filtros").clicked();

    for action in actions {
        debug!(?action, "UI: filter changed");
        app.dispatch(action);
    }
    if price_changed {
        app.push_price_range();
    }
    if reset {
        app.reset_filters();
    }
}
