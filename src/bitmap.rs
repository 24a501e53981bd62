//! Owned RGBA pixel buffers used as overhead node content
//!
//! Bitmaps are plain memory. The renderer uploads them to textures and uses
//! `revision` to know when an upload is stale.

/// An RGBA8 pixel buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    revision: u64,
}

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const WHITE: Rgba = Rgba(255, 255, 255, 255);
    pub const OUTLINE: Rgba = Rgba(0, 0, 0, 160);
}

impl Bitmap {
    /// Creates a fully transparent bitmap
    pub fn new(width: u32, height: u32) -> Self {
        Bitmap {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
            revision: 0,
        }
    }

    /// Wraps existing RGBA8 pixels
    ///
    /// Returns `None` if the buffer length doesn't match the size.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        if pixels.len() != (width * height * 4) as usize {
            return None;
        }
        Some(Bitmap {
            width,
            height,
            pixels,
            revision: 0,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Bumped on every pixel change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Erases every pixel. The size is kept.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
        self.revision += 1;
    }

    /// True if every pixel is transparent
    pub fn is_blank(&self) -> bool {
        self.pixels.chunks_exact(4).all(|px| px[3] == 0)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Some(Rgba(
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ))
    }

    /// Fills a rectangle, clipped to the bitmap bounds
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgba) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + width as i32).min(self.width as i32);
        let y1 = (y + height as i32).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for py in y0..y1 {
            for px in x0..x1 {
                let i = ((py as u32 * self.width + px as u32) * 4) as usize;
                self.pixels[i..i + 4].copy_from_slice(&[color.0, color.1, color.2, color.3]);
            }
        }
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bitmap_is_blank() {
        let bitmap = Bitmap::new(4, 3);
        assert_eq!(bitmap.pixels().len(), 48);
        assert!(bitmap.is_blank());
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut bitmap = Bitmap::new(4, 4);
        bitmap.fill_rect(-2, -2, 3, 3, Rgba::WHITE);
        assert_eq!(bitmap.pixel(0, 0), Some(Rgba::WHITE));
        assert_eq!(bitmap.pixel(1, 1), Some(Rgba(0, 0, 0, 0)));
        assert_eq!(bitmap.pixel(4, 0), None);
    }

    #[test]
    fn test_clear_keeps_size_and_bumps_revision() {
        let mut bitmap = Bitmap::new(2, 2);
        bitmap.fill_rect(0, 0, 2, 2, Rgba::WHITE);
        let before = bitmap.revision();
        bitmap.clear();
        assert!(bitmap.is_blank());
        assert_eq!((bitmap.width(), bitmap.height()), (2, 2));
        assert!(bitmap.revision() > before);
    }

    #[test]
    fn test_from_rgba_checks_length() {
        assert!(Bitmap::from_rgba(2, 2, vec![0; 16]).is_some());
        assert!(Bitmap::from_rgba(2, 2, vec![0; 15]).is_none());
    }
}
