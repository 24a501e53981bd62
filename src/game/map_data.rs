//! Map authoring data
//!
//! Maps are JSON files describing the map size, the player start and a
//! sparse list of events. Each event has one or more pages; the page whose
//! conditions hold decides what the event does and says.
//!
//! ```json
//! {
//!   "width": 17, "height": 13, "startX": 8, "startY": 6,
//!   "events": [null, {
//!     "id": 1, "name": "Shop", "note": "", "x": 4, "y": 3,
//!     "pages": [{ "list": [{ "code": 108, "parameters": ["<Name: Shopkeeper, 3>"] }] }]
//!   }]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Command code of a comment instruction
pub const COMMENT_CODE: u16 = 108;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to read map {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid map data: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapData {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub start_x: i32,
    #[serde(default)]
    pub start_y: i32,
    #[serde(default)]
    pub events: Vec<Option<EventData>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventData {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub note: String,
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub pages: Vec<EventPage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPage {
    #[serde(default)]
    pub conditions: PageConditions,
    #[serde(default)]
    pub list: Vec<EventCommand>,
}

/// Conditions a page needs to become active
///
/// Only conditions marked valid are checked; a page with none is always
/// eligible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConditions {
    pub switch1_valid: bool,
    pub switch1_id: u32,
    pub switch2_valid: bool,
    pub switch2_id: u32,
    pub variable_valid: bool,
    pub variable_id: u32,
    pub variable_value: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCommand {
    pub code: u16,
    #[serde(default)]
    pub indent: u32,
    #[serde(default)]
    pub parameters: Vec<serde_json::Value>,
}

impl MapData {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, MapError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl EventCommand {
    /// Creates a comment instruction
    pub fn comment(text: impl Into<String>) -> Self {
        EventCommand {
            code: COMMENT_CODE,
            indent: 0,
            parameters: vec![serde_json::Value::String(text.into())],
        }
    }

    /// The comment text, if this is a comment instruction
    pub fn comment_text(&self) -> Option<&str> {
        if self.code != COMMENT_CODE {
            return None;
        }
        self.parameters.first()?.as_str()
    }
}

impl EventPage {
    /// Text of every comment instruction on the page, in order
    pub fn comments(&self) -> impl Iterator<Item = &str> {
        self.list.iter().filter_map(EventCommand::comment_text)
    }
}
