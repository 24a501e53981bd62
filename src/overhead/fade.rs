//! Visibility transitions for overhead nodes
//!
//! Two presentation models, picked per visual kind by configuration:
//!
//! - `Fade`: opacity moves toward 255 (in range) or 0 (out of range) by a
//!   fixed step each frame. `visible` is never touched.
//! - `Cut`: `visible` flips immediately. Opacity is never touched.

use super::node::OverheadNode;

pub const MAX_OPACITY: f32 = 255.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VisibilityMode {
    Fade { step: f32 },
    Cut,
}

impl VisibilityMode {
    /// Mode for a fade flag and a per-frame step
    pub fn new(fade: bool, step: f32) -> Self {
        if fade {
            VisibilityMode::Fade { step }
        } else {
            VisibilityMode::Cut
        }
    }

    /// Applies one frame of transition to `node`
    pub fn apply(self, node: &mut OverheadNode, in_range: bool) {
        match self {
            VisibilityMode::Fade { step } => {
                if in_range {
                    if node.opacity != MAX_OPACITY {
                        node.opacity = (node.opacity + step).min(MAX_OPACITY);
                    }
                } else if node.opacity != 0.0 {
                    node.opacity = (node.opacity - step).max(0.0);
                }
            }
            VisibilityMode::Cut => node.visible = in_range,
        }
    }
}

/// Taxicab distance between two tile positions
pub fn tile_distance(a: (i32, i32), b: (i32, i32)) -> u32 {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}
