// src/gui/textures.rs
//
// Product pictures decoded once and kept as GPU textures. Failed decodes
// are remembered too, so a broken file is not re-read every frame.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};

use crate::images;

#[derive(Default)]
pub struct TextureCache {
    entries: HashMap<PathBuf, Option<TextureHandle>>,
}

impl TextureCache {
    pub fn get(&mut self, ctx: &egui::Context, path: &Path) -> Option<&TextureHandle> {
        self.entries
            .entry(path.to_path_buf())
            .or_insert_with(|| load(ctx, path))
            .as_ref()
    }
}

fn load(ctx: &egui::Context, path: &Path) -> Option<TextureHandle> {
    let px = images::decode(path)?;
    let img = ColorImage::from_rgba_unmultiplied([px.width, px.height], &px.rgba);
    Some(ctx.load_texture(path.to_string_lossy(), img, TextureOptions::LINEAR))
}
