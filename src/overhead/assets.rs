use crate::bitmap::Bitmap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("system image '{0}' not found")]
    NotFound(String),
    #[error("failed to decode system image '{name}': {reason}")]
    Decode { name: String, reason: String },
}

/// Source of pictures from the system image namespace
///
/// `name` is the bare picture name from the event, without folder or
/// extension.
pub trait ImageLoader {
    fn load_system(&mut self, name: &str) -> Result<Bitmap, AssetError>;
}
