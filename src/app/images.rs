//! System image loading through SDL2_image

use event_names::bitmap::Bitmap;
use event_names::overhead::{AssetError, ImageLoader};
use sdl2::image::LoadSurface;
use sdl2::pixels::PixelFormatEnum;
use sdl2::surface::Surface;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// Folder holding pictures shown above events
pub const SYSTEM_IMAGE_DIR: &str = "assets/img/system";

/// Loads `<dir>/<name>.png` into RGBA bitmaps, caching by name
pub struct SdlImageLoader {
    directory: PathBuf,
    cache: HashMap<String, Bitmap>,
}

impl SdlImageLoader {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        SdlImageLoader {
            directory: directory.into(),
            cache: HashMap::new(),
        }
    }

    fn decode(&self, name: &str) -> Result<Bitmap, AssetError> {
        let path = self.directory.join(format!("{}.png", name));
        if !path.exists() {
            return Err(AssetError::NotFound(name.to_string()));
        }

        let decode_error = |reason: String| AssetError::Decode {
            name: name.to_string(),
            reason,
        };

        let surface = Surface::from_file(&path).map_err(decode_error)?;
        // ABGR8888 is R, G, B, A in memory on little-endian targets
        let surface = surface
            .convert_format(PixelFormatEnum::ABGR8888)
            .map_err(decode_error)?;

        let width = surface.width();
        let height = surface.height();
        let pitch = surface.pitch() as usize;
        let row_len = width as usize * 4;

        let pixels = surface.with_lock(|data| {
            let mut pixels = Vec::with_capacity(row_len * height as usize);
            for row in data.chunks(pitch).take(height as usize) {
                pixels.extend_from_slice(&row[..row_len]);
            }
            pixels
        });

        Bitmap::from_rgba(width, height, pixels)
            .ok_or_else(|| decode_error("unexpected pixel buffer size".to_string()))
    }
}

impl ImageLoader for SdlImageLoader {
    fn load_system(&mut self, name: &str) -> Result<Bitmap, AssetError> {
        if let Some(bitmap) = self.cache.get(name) {
            return Ok(bitmap.clone());
        }

        let bitmap = self.decode(name)?;
        debug!(name, width = bitmap.width(), height = bitmap.height(), "loaded system image");
        self.cache.insert(name.to_string(), bitmap.clone());
        Ok(bitmap)
    }
}
