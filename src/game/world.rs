// GameWorld struct
//
// Owns the map's events, one character sprite per event, the player and
// the game flags, and drives them once per frame.

use super::event::MapEvent;
use super::flags::GameFlags;
use super::map_data::MapData;
use super::player::{Direction, Player};
use crate::config::OverlayConfig;
use crate::overhead::{ImageLoader, OverheadPresenter, SpriteFrame};
use tracing::info;

/// Tile edge length in pixels
pub const TILE_SIZE: u32 = 48;
/// Height of a character frame in pixels
pub const CHARACTER_FRAME_HEIGHT: u32 = 48;
/// Draw order of normal characters
pub const CHARACTER_Z: i32 = 3;

/// The visual side of one event
pub struct CharacterSprite {
    pub event_index: usize,
    pub frame_height: u32,
    pub presenter: OverheadPresenter,
}

impl CharacterSprite {
    pub fn new(event_index: usize) -> Self {
        CharacterSprite {
            event_index,
            frame_height: CHARACTER_FRAME_HEIGHT,
            presenter: OverheadPresenter::new(),
        }
    }

    /// Screen anchor (bottom center) for a character at a tile
    pub fn frame_at(&self, tile: (i32, i32)) -> SpriteFrame {
        SpriteFrame {
            x: (tile.0 * TILE_SIZE as i32 + TILE_SIZE as i32 / 2) as f32,
            y: ((tile.1 + 1) * TILE_SIZE as i32) as f32,
            frame_height: self.frame_height,
        }
    }
}

pub struct GameWorld {
    pub width: u32,
    pub height: u32,
    pub events: Vec<MapEvent>,
    pub sprites: Vec<CharacterSprite>,
    pub player: Player,
    pub flags: GameFlags,
    config: OverlayConfig,
    frame_count: u64,
}

impl GameWorld {
    pub fn new(map: MapData, config: OverlayConfig) -> Self {
        let flags = GameFlags::new();
        let events: Vec<MapEvent> = map
            .events
            .into_iter()
            .flatten()
            .map(|data| MapEvent::new(data, &flags, &config))
            .collect();
        let sprites = (0..events.len()).map(CharacterSprite::new).collect();

        info!(
            width = map.width,
            height = map.height,
            events = events.len(),
            "map loaded"
        );

        GameWorld {
            width: map.width,
            height: map.height,
            events,
            sprites,
            player: Player::new(map.start_x, map.start_y),
            flags,
            config,
            frame_count: 0,
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn move_player(&mut self, direction: Direction) -> bool {
        self.player.step(direction, self.width, self.height)
    }

    /// Runs one frame
    ///
    /// Every event updates before any sprite, so a page change made this
    /// frame is already visible to the overhead presenters.
    pub fn update<L>(&mut self, images: &mut L)
    where
        L: ImageLoader + ?Sized,
    {
        self.frame_count += 1;

        for event in &mut self.events {
            event.update(&self.flags, &self.config);
        }

        let player = self.player.position();
        for sprite in &mut self.sprites {
            let Some(event) = self.events.get(sprite.event_index) else {
                continue;
            };
            let frame = sprite.frame_at((event.x, event.y));
            sprite
                .presenter
                .update(&frame, event, player, &self.config, images);
        }
    }
}
