// Demo host: SDL2 window, image loading and map rendering

pub mod images;
pub mod render;

pub use images::{SdlImageLoader, SYSTEM_IMAGE_DIR};
pub use render::{render_world, OverheadTextures};
