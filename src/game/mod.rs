// Game module - The host side the overhead system plugs into
//
// This module contains:
// - map_data.rs: Map, event and page authoring data (JSON)
// - flags.rs: Switches and variables used by page conditions
// - event.rs: MapEvent, page selection and overhead resolution
// - player.rs: The controlled character
// - world.rs: GameWorld struct driving events and sprites each frame

pub mod event;
pub mod flags;
pub mod map_data;
pub mod player;
pub mod world;

// Re-export types for convenience
pub use event::MapEvent;
pub use flags::GameFlags;
pub use map_data::{EventCommand, EventData, EventPage, MapData, MapError, PageConditions};
pub use player::{Direction, Player};
pub use world::{CharacterSprite, GameWorld, CHARACTER_Z, TILE_SIZE};
