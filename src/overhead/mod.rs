//! World-Space Overhead Components
//!
//! Name labels and pictures drawn above event sprites.
//!
//! # Architecture
//!
//! - [`OverheadNode`]: a scene node with bitmap, position, opacity and
//!   visibility
//! - [`OverheadPresenter`]: per-sprite state that owns two nodes and keeps
//!   them in sync with the event's [`OverheadData`](crate::metadata::OverheadData)
//! - [`VisibilityMode`]: fade or hard cut, chosen per visual kind
//! - [`ImageLoader`]: where pictures come from
//!
//! Presenters never mutate events. The host must update events before
//! presenters in the same tick so a page change shows up immediately.

pub mod assets;
pub mod fade;
pub mod node;
pub mod presenter;

pub use assets::{AssetError, ImageLoader};
pub use fade::{tile_distance, VisibilityMode};
pub use node::{OverheadNode, OVERHEAD_Z};
pub use presenter::{OverheadPresenter, OverheadSource, SpriteFrame};
