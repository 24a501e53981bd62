//! Overhead presenter
//!
//! One presenter belongs to one character sprite. Every frame it:
//! 1. creates its label and picture nodes on the first call
//! 2. rebuilds node content when the event's name or picture changed
//! 3. places both nodes above the sprite
//! 4. shows, hides or fades each node by distance to the player
//!
//! The presenter only reads event data; the event owns and updates it.

use super::assets::ImageLoader;
use super::fade::{tile_distance, VisibilityMode};
use super::node::OverheadNode;
use crate::bitmap::Bitmap;
use crate::config::OverlayConfig;
use crate::metadata::OverheadData;
use crate::text::{draw_text, measure_text_width, Align};
use tracing::{debug, warn};

/// Gap between the top of the sprite frame and the overhead nodes
pub const OVERHEAD_MARGIN: f32 = 12.0;
/// Extra label width around the measured text
pub const LABEL_PADDING_X: u32 = 40;
/// Extra label height on top of the font size
pub const LABEL_PADDING_Y: u32 = 10;

/// Anything that carries overhead data at a tile position
pub trait OverheadSource {
    fn overhead(&self) -> &OverheadData;
    fn tile_position(&self) -> (i32, i32);
}

/// Screen placement of the owning sprite
///
/// `(x, y)` is the sprite's anchor: horizontal center, bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteFrame {
    pub x: f32,
    pub y: f32,
    pub frame_height: u32,
}

#[derive(Debug)]
struct OverheadNodes {
    name: OverheadNode,
    picture: OverheadNode,
}

/// Label and picture state for one sprite
#[derive(Debug, Default)]
pub struct OverheadPresenter {
    nodes: Option<OverheadNodes>,
    current_name: String,
    current_picture: String,
}

impl OverheadPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the nodes exist
    pub fn is_attached(&self) -> bool {
        self.nodes.is_some()
    }

    pub fn name_node(&self) -> Option<&OverheadNode> {
        self.nodes.as_ref().map(|n| &n.name)
    }

    pub fn picture_node(&self) -> Option<&OverheadNode> {
        self.nodes.as_ref().map(|n| &n.picture)
    }

    /// Both nodes in draw order (picture first, label on top)
    pub fn nodes(&self) -> impl Iterator<Item = &OverheadNode> {
        self.nodes
            .iter()
            .flat_map(|n| [&n.picture, &n.name])
    }

    /// Runs one frame of overhead presentation
    pub fn update<S, L>(
        &mut self,
        sprite: &SpriteFrame,
        source: &S,
        player: (i32, i32),
        config: &OverlayConfig,
        images: &mut L,
    ) where
        S: OverheadSource + ?Sized,
        L: ImageLoader + ?Sized,
    {
        let data = source.overhead();

        if self.nodes.is_none() {
            self.attach(data, config, images);
        }
        if data.name != self.current_name {
            self.refresh_name(data, config);
        }
        if data.picture != self.current_picture {
            self.refresh_picture(data, images);
        }

        let distance = tile_distance(player, source.tile_position());
        let step = config.fade_step();
        let name_mode = VisibilityMode::new(config.fade_names, step);
        let picture_mode = VisibilityMode::new(config.fade_pictures, step);

        if let Some(nodes) = self.nodes.as_mut() {
            place_above(&mut nodes.name, sprite);
            name_mode.apply(&mut nodes.name, distance <= data.name_range);

            place_above(&mut nodes.picture, sprite);
            picture_mode.apply(&mut nodes.picture, distance <= data.picture_range);
        }
    }

    fn attach<L>(&mut self, data: &OverheadData, config: &OverlayConfig, images: &mut L)
    where
        L: ImageLoader + ?Sized,
    {
        self.nodes = Some(OverheadNodes {
            name: OverheadNode::new(),
            picture: OverheadNode::new(),
        });
        self.refresh_picture(data, images);
        self.refresh_name(data, config);
    }

    fn refresh_name(&mut self, data: &OverheadData, config: &OverlayConfig) {
        let Some(nodes) = self.nodes.as_mut() else {
            return;
        };
        self.current_name = data.name.clone();

        if data.name.is_empty() {
            nodes.name.clear_bitmap();
            return;
        }

        debug!(name = %data.name, "rendering overhead label");
        nodes.name.set_bitmap(render_label(&data.name, config.font_size));
    }

    fn refresh_picture<L>(&mut self, data: &OverheadData, images: &mut L)
    where
        L: ImageLoader + ?Sized,
    {
        let Some(nodes) = self.nodes.as_mut() else {
            return;
        };
        self.current_picture = data.picture.clone();

        if data.picture.is_empty() {
            nodes.picture.clear_bitmap();
            return;
        }

        match images.load_system(&data.picture) {
            Ok(bitmap) => nodes.picture.set_bitmap(bitmap),
            Err(e) => {
                warn!("{}", e);
                nodes.picture.clear_bitmap();
            }
        }
    }
}

/// Builds a label bitmap sized to fit `text`
pub fn render_label(text: &str, font_size: u32) -> Bitmap {
    let width = measure_text_width(text, font_size) + LABEL_PADDING_X;
    let height = font_size + LABEL_PADDING_Y;
    let mut bitmap = Bitmap::new(width, height);
    draw_text(&mut bitmap, text, 0, 0, width, height, font_size, Align::Center);
    bitmap
}

fn place_above(node: &mut OverheadNode, sprite: &SpriteFrame) {
    node.x = sprite.x - node.width() as f32 / 2.0;
    node.y = sprite.y
        - node.height() as f32 / 2.0
        - OVERHEAD_MARGIN
        - sprite.frame_height as f32;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::Rgba;
    use crate::overhead::assets::AssetError;

    struct Npc {
        data: OverheadData,
        pos: (i32, i32),
    }

    impl OverheadSource for Npc {
        fn overhead(&self) -> &OverheadData {
            &self.data
        }

        fn tile_position(&self) -> (i32, i32) {
            self.pos
        }
    }

    /// Serves 8x8 opaque squares for every name except "Missing"
    #[derive(Default)]
    struct FakeImages {
        loads: Vec<String>,
    }

    impl ImageLoader for FakeImages {
        fn load_system(&mut self, name: &str) -> Result<Bitmap, AssetError> {
            self.loads.push(name.to_string());
            if name == "Missing" {
                return Err(AssetError::NotFound(name.to_string()));
            }
            let mut bitmap = Bitmap::new(8, 8);
            bitmap.fill_rect(0, 0, 8, 8, Rgba::WHITE);
            Ok(bitmap)
        }
    }

    const SPRITE: SpriteFrame = SpriteFrame {
        x: 100.0,
        y: 200.0,
        frame_height: 48,
    };

    fn npc(name: &str, name_range: u32) -> Npc {
        Npc {
            data: OverheadData {
                name: name.to_string(),
                name_range,
                ..Default::default()
            },
            pos: (10, 10),
        }
    }

    fn fading_names() -> OverlayConfig {
        OverlayConfig {
            fade_names: true,
            fade_timer: 4,
            ..Default::default()
        }
    }

    #[test]
    fn test_attaches_once() {
        let mut presenter = OverheadPresenter::new();
        let mut images = FakeImages::default();
        let npc = npc("Shopkeeper", 3);
        let config = OverlayConfig::default();

        assert!(!presenter.is_attached());
        presenter.update(&SPRITE, &npc, (10, 10), &config, &mut images);
        assert!(presenter.is_attached());
        let revision = presenter.name_node().unwrap().revision();

        presenter.update(&SPRITE, &npc, (10, 10), &config, &mut images);
        assert_eq!(presenter.name_node().unwrap().revision(), revision);
        assert_eq!(presenter.nodes().count(), 2);
    }

    #[test]
    fn test_label_size_and_position() {
        let mut presenter = OverheadPresenter::new();
        let config = OverlayConfig::default();
        presenter.update(&SPRITE, &npc("SHOP", 3), (10, 10), &config, &mut FakeImages::default());

        let node = presenter.name_node().unwrap();
        // 69px of text at font size 24, plus padding
        assert_eq!(node.width(), 109);
        assert_eq!(node.height(), 34);
        assert_eq!(node.x, 100.0 - 54.5);
        assert_eq!(node.y, 200.0 - 17.0 - 12.0 - 48.0);
        assert!(node.is_showing());
    }

    #[test]
    fn test_name_change_rebuilds_label() {
        let mut presenter = OverheadPresenter::new();
        let mut images = FakeImages::default();
        let config = OverlayConfig::default();
        let mut npc = npc("Ann", 3);

        presenter.update(&SPRITE, &npc, (10, 10), &config, &mut images);
        let first = presenter.name_node().unwrap().revision();

        npc.data.name = "Bea".to_string();
        presenter.update(&SPRITE, &npc, (10, 10), &config, &mut images);
        assert!(presenter.name_node().unwrap().revision() > first);
    }

    #[test]
    fn test_empty_name_clears_label() {
        let mut presenter = OverheadPresenter::new();
        let mut images = FakeImages::default();
        let config = OverlayConfig::default();
        let mut npc = npc("Ann", 3);

        presenter.update(&SPRITE, &npc, (10, 10), &config, &mut images);
        assert!(presenter.name_node().unwrap().is_showing());

        npc.data = OverheadData::default();
        presenter.update(&SPRITE, &npc, (10, 10), &config, &mut images);
        let node = presenter.name_node().unwrap();
        assert!(node.bitmap.as_ref().unwrap().is_blank());
        assert!(!node.is_showing());
    }

    #[test]
    fn test_cut_by_distance() {
        let mut presenter = OverheadPresenter::new();
        let mut images = FakeImages::default();
        let config = OverlayConfig::default();
        let npc = npc("Shopkeeper", 3);

        // Distance 2
        presenter.update(&SPRITE, &npc, (11, 11), &config, &mut images);
        assert!(presenter.name_node().unwrap().visible);

        // Distance 4
        presenter.update(&SPRITE, &npc, (12, 12), &config, &mut images);
        let node = presenter.name_node().unwrap();
        assert!(!node.visible);
        assert_eq!(node.opacity, 255.0);

        // Exactly at range
        presenter.update(&SPRITE, &npc, (13, 10), &config, &mut images);
        assert!(presenter.name_node().unwrap().visible);
    }

    #[test]
    fn test_fade_by_distance() {
        let mut presenter = OverheadPresenter::new();
        let mut images = FakeImages::default();
        let config = fading_names();
        let npc = npc("Shopkeeper", 3);

        for expected in [191.25, 127.5, 63.75, 0.0, 0.0] {
            presenter.update(&SPRITE, &npc, (12, 12), &config, &mut images);
            let node = presenter.name_node().unwrap();
            assert_eq!(node.opacity, expected);
            assert!(node.visible);
        }

        presenter.update(&SPRITE, &npc, (10, 11), &config, &mut images);
        assert_eq!(presenter.name_node().unwrap().opacity, 63.75);
    }

    #[test]
    fn test_name_and_picture_independent() {
        let mut presenter = OverheadPresenter::new();
        let mut images = FakeImages::default();
        let config = OverlayConfig {
            fade_pictures: true,
            fade_timer: 5,
            ..Default::default()
        };
        let npc = Npc {
            data: OverheadData {
                name: "Guard".to_string(),
                name_range: 1,
                picture: "Shield".to_string(),
                picture_range: 6,
            },
            pos: (0, 0),
        };

        presenter.update(&SPRITE, &npc, (2, 2), &config, &mut images);
        let name = presenter.name_node().unwrap();
        let picture = presenter.picture_node().unwrap();
        assert!(!name.visible);
        assert_eq!(picture.opacity, 255.0);
        assert!(picture.visible);
        assert_eq!(picture.width(), 8);
        assert_eq!(picture.x, 96.0);
        assert_eq!(images.loads, vec!["Shield".to_string()]);
    }

    #[test]
    fn test_missing_picture_leaves_node_blank() {
        let mut presenter = OverheadPresenter::new();
        let mut images = FakeImages::default();
        let npc = Npc {
            data: OverheadData {
                picture: "Missing".to_string(),
                picture_range: 5,
                ..Default::default()
            },
            pos: (0, 0),
        };

        presenter.update(&SPRITE, &npc, (0, 0), &OverlayConfig::default(), &mut images);
        presenter.update(&SPRITE, &npc, (0, 0), &OverlayConfig::default(), &mut images);
        assert!(!presenter.picture_node().unwrap().is_showing());
        // No retry while the picture name is unchanged
        assert_eq!(images.loads.len(), 1);
    }
}
