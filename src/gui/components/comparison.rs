// src/gui/components/comparison.rs
//
// Bottom panel: the comparison table of the selected products, with
// clear and copy buttons.

use eframe::egui::{self, Align, Layout};
use egui_extras::{Column, TableBuilder};
use tracing::info;

use crate::compare::{Comparison, ComparisonTable};
use crate::config::consts::MSG_NO_COMPARISON;
use crate::export;
use crate::gui::app::App;
use crate::session::Action;

fn table(ui: &mut egui::Ui, t: &ComparisonTable) {
    let headers = t.headers();
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::initial(160.0).at_least(60.0).clip(true), headers.len())
        .min_scrolled_height(0.0)
        .header(22.0, |mut header| {
            for h in &headers {
                header.col(|ui| { ui.strong(h.as_str()); });
            }
        })
        .body(|mut body| {
            for r in &t.rows {
                body.row(20.0, |mut row| {
                    for cell in r {
                        row.col(|ui| { ui.label(cell.as_str()); });
                    }
                });
            }
        });
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(session) = app.session.as_ref() else { return };
    let comparison = session.comparison();
    let selected = session.selection().len();

    let mut clear = false;
    let mut copy_text = None;

    ui.horizontal(|ui| {
        ui.heading("Comparar productos seleccionados");
        ui.label(format!("({selected})"));
        if let Comparison::Table(t) = &comparison {
            if ui.button("Limpiar selección").clicked() {
                clear = true;
            }
            if ui.button("Copiar").clicked() {
                copy_text = Some(export::comparison_to_string(t, &app.state.options.export));
            }
        }
    });
    ui.separator();

    match &comparison {
        Comparison::Empty => {
            ui.colored_label(ui.visuals().hyperlink_color, MSG_NO_COMPARISON);
            // Selected names that are not in the catalog still count; let
            // the user drop them.
            if selected > 0 && ui.button("Limpiar selección").clicked() {
                clear = true;
            }
        }
        Comparison::Table(t) => {
            egui::ScrollArea::horizontal()
                .id_salt("comparison_hscroll")
                .show(ui, |ui| table(ui, t));
        }
    }

    if let Some(txt) = copy_text {
        info!(rows = comparison.table().map(|t| t.len()).unwrap_or(0), "comparison copied");
        ui.ctx().copy_text(txt);
        app.state.gui.status = s!("Comparación copiada al portapapeles");
    }
    if clear {
        app.dispatch(Action::ClearComparison);
    }
}
