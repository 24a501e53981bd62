use crate::bitmap::Bitmap;

/// Draw order of overhead nodes, above normal characters
pub const OVERHEAD_Z: i32 = 7;

/// A lightweight scene node holding one overhead visual
///
/// Width and height come from the bitmap; a node without a bitmap is 0x0.
/// `opacity` is kept as `f32` so fractional fade steps accumulate exactly.
#[derive(Debug, Clone)]
pub struct OverheadNode {
    pub bitmap: Option<Bitmap>,
    pub x: f32,
    pub y: f32,
    pub z: i32,
    pub opacity: f32,
    pub visible: bool,
    revision: u64,
}

impl OverheadNode {
    pub fn new() -> Self {
        OverheadNode {
            bitmap: None,
            x: 0.0,
            y: 0.0,
            z: OVERHEAD_Z,
            opacity: 255.0,
            visible: true,
            revision: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.bitmap.as_ref().map_or(0, Bitmap::width)
    }

    pub fn height(&self) -> u32 {
        self.bitmap.as_ref().map_or(0, Bitmap::height)
    }

    /// Replaces the bitmap content
    pub fn set_bitmap(&mut self, bitmap: Bitmap) {
        self.bitmap = Some(bitmap);
        self.revision += 1;
    }

    /// Erases the bitmap's pixels, keeping the node in the scene
    pub fn clear_bitmap(&mut self) {
        if let Some(bitmap) = self.bitmap.as_mut() {
            bitmap.clear();
            self.revision += 1;
        }
    }

    /// Changes every time the content is replaced or cleared
    ///
    /// Renderers compare this against the revision they last uploaded.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// True if the node would draw something this frame
    pub fn is_showing(&self) -> bool {
        self.visible
            && self.opacity > 0.0
            && self.bitmap.as_ref().is_some_and(|b| !b.is_blank())
    }
}

impl Default for OverheadNode {
    fn default() -> Self {
        Self::new()
    }
}
