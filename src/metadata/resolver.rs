//! Overhead data resolution
//!
//! Turns an event's authoring data into the name, picture and ranges the
//! presenter shows. Explicit note annotations win over everything; when an
//! event has none, the active page's comments are scanned instead.

use super::tags::{find_inline_tag, parse_annotation, TagKind};
use crate::config::OverlayConfig;
use std::collections::HashMap;

/// Note key for an explicit name annotation
pub const NAME_KEY: &str = "Name";
/// Note key for an explicit picture annotation
pub const PICTURE_KEY: &str = "Picture";

/// What an event shows above its head
///
/// An empty `name` or `picture` means nothing is shown for that visual.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverheadData {
    pub name: String,
    pub name_range: u32,
    pub picture: String,
    pub picture_range: u32,
}

impl OverheadData {
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn has_picture(&self) -> bool {
        !self.picture.is_empty()
    }
}

/// Resolves explicit `Name` / `Picture` note annotations
///
/// Returns `None` when neither annotation is present (or both are empty),
/// in which case comments decide. A missing half stays empty with range 0.
pub fn resolve_explicit(
    meta: &HashMap<String, String>,
    config: &OverlayConfig,
) -> Option<OverheadData> {
    let annotation = |key: &str| meta.get(key).filter(|value| !value.trim().is_empty());
    let name = annotation(NAME_KEY);
    let picture = annotation(PICTURE_KEY);
    if name.is_none() && picture.is_none() {
        return None;
    }

    let mut data = OverheadData::default();
    if let Some(raw) = name {
        let tag = parse_annotation(raw, config.default_range);
        data.name = tag.value;
        data.name_range = tag.range;
    }
    if let Some(raw) = picture {
        let tag = parse_annotation(raw, config.default_range);
        data.picture = tag.value;
        data.picture_range = tag.range;
    }
    Some(data)
}

/// Resolves overhead data from a page's comment lines
///
/// Every line is checked for both tags; the last match of each kind wins.
/// With no match the result is empty with zero ranges.
///
/// # Example
///
/// ```
/// use event_names::config::OverlayConfig;
/// use event_names::metadata::resolver::resolve_from_comments;
///
/// let data = resolve_from_comments(["<Name: Shopkeeper, 3>"], &OverlayConfig::default());
/// assert_eq!(data.name, "Shopkeeper");
/// assert_eq!(data.name_range, 3);
/// assert!(data.picture.is_empty());
/// ```
pub fn resolve_from_comments<'a>(
    comments: impl IntoIterator<Item = &'a str>,
    config: &OverlayConfig,
) -> OverheadData {
    let mut data = OverheadData::default();

    for comment in comments {
        if let Some(tag) = find_inline_tag(comment, TagKind::Name, config.default_range) {
            data.name = tag.value;
            data.name_range = tag.range;
        }
        if let Some(tag) = find_inline_tag(comment, TagKind::Picture, config.default_range) {
            data.picture = tag.value;
            data.picture_range = tag.range;
        }
    }

    data
}
