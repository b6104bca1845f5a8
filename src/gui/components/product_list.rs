// src/gui/components/product_list.rs
//
// Central panel: one card per visible product. Purely a view over
// `Session::visible()`; button clicks are collected and dispatched after
// the pass.

use eframe::egui::{self, RichText};

use crate::catalog::{Field, Product};
use crate::config::consts::{CARD_IMAGE_MAX_W, MSG_NO_MATCHES};
use crate::gui::{app::App, textures::TextureCache};
use crate::images;
use crate::session::Action;

fn field_line(ui: &mut egui::Ui, field: Field, value: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new(join!(field.label(), ":")).strong());
        ui.label(value);
    });
}

/// Draws one product; returns true when its compare button was clicked.
fn card(ui: &mut egui::Ui, p: &Product, picture: Option<&egui::TextureHandle>, extended: bool) -> bool {
    let mut clicked = false;
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_top(|ui| {
            if let Some(tex) = picture {
                ui.add(egui::Image::new(tex).max_width(CARD_IMAGE_MAX_W));
            }
            ui.vertical(|ui| {
                ui.label(RichText::new(p.name.as_str()).heading());
                field_line(ui, Field::Brand, &p.brand);
                field_line(ui, Field::Category, &p.category);
                field_line(ui, Field::Price, &p.price);
                field_line(ui, Field::SkinType, &p.skin_type);
                field_line(ui, Field::Application, &p.application);
                field_line(ui, Field::LongTermEffect, &p.long_term_effect);
                if extended {
                    for field in [Field::CrueltyFree, Field::Volume, Field::Texture, Field::Vegan] {
                        if let Some(v) = p.get(field) {
                            field_line(ui, field, v);
                        }
                    }
                }
                if !p.link.trim().is_empty() {
                    ui.hyperlink_to("Comprar aquí", p.link.trim());
                }
                let label = join!("Seleccionar ", &p.name, " para comparar");
                clicked = ui.button(label).clicked();
            });
        });
    });
    clicked
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let App { session, textures, .. } = &mut *app;
    let Some(session) = session.as_ref() else { return };

    let options = session.options();
    let extended = options.variant.shows_images();
    let view = session.visible();

    ui.horizontal(|ui| {
        ui.heading("Productos filtrados");
        ui.label(format!("({} de {})", view.len(), session.catalog().len()));
    });
    ui.separator();

    if view.is_empty() {
        ui.colored_label(ui.visuals().warn_fg_color, MSG_NO_MATCHES);
        return;
    }

    let mut picked: Vec<String> = Vec::new();
    let ctx = ui.ctx().clone();

    egui::ScrollArea::vertical()
        .id_salt("product_list_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for p in view.iter() {
                let picture = if extended {
                    picture_for(&ctx, textures, &options.image_dir, p)
                } else {
                    None
                };
                if card(ui, p, picture, extended) {
                    picked.push(p.name.clone());
                }
                ui.add_space(4.0);
            }
        });

    for name in picked {
        app.dispatch(Action::SelectForComparison(name));
    }
}

fn picture_for<'t>(
    ctx: &egui::Context,
    textures: &'t mut TextureCache,
    image_dir: &std::path::Path,
    p: &Product,
) -> Option<&'t egui::TextureHandle> {
    let path = images::resolve(image_dir, p.image.as_deref())?;
    textures.get(ctx, &path)
}
