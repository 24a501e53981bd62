//! Event overhead metadata
//!
//! - `note`: `<Key:Value>` tag extraction from event notes
//! - `tags`: annotation and inline comment tag parsing
//! - `resolver`: picks the name, picture and ranges an event shows

pub mod note;
pub mod resolver;
pub mod tags;

pub use note::extract_metadata;
pub use resolver::{resolve_explicit, resolve_from_comments, OverheadData};
pub use tags::DisplayTag;
