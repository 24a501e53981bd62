//! Event names and pictures above map events
//!
//! Events get a floating name label and/or a picture, shown only while the
//! player is within a tile range and optionally faded in and out.
//!
//! - [`metadata`] resolves what an event shows from its note or comments
//! - [`overhead`] presents it above the event's sprite every frame
//! - [`game`] is a minimal host: map data, events, player and world loop

pub mod bitmap;
pub mod config;
pub mod game;
pub mod metadata;
pub mod overhead;
pub mod text;
