// src/images.rs
use std::path::{Path, PathBuf};

use tracing::debug;

/// `image_dir/filename` when the filename is set and the file exists.
/// A missing picture is never an error.
pub fn resolve(image_dir: &Path, filename: Option<&str>) -> Option<PathBuf> {
    let name = filename.map(str::trim).filter(|n| !n.is_empty())?;
    let path = image_dir.join(name);
    if path.is_file() {
        Some(path)
    } else {
        debug!("image not found: {}", path.display());
        None
    }
}

/// Decoded RGBA pixels, ready for the GUI texture upload.
pub struct Pixels {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

/// Decode a picture. Unsupported or corrupt files yield `None`.
pub fn decode(path: &Path) -> Option<Pixels> {
    match image::open(path) {
        Ok(img) => {
            let rgba = img.to_rgba8();
            let (w, h) = rgba.dimensions();
            Some(Pixels { width: w as usize, height: h as usize, rgba: rgba.into_raw() })
        }
        Err(e) => {
            debug!("cannot decode {}: {e}", path.display());
            None
        }
    }
}
