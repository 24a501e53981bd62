//! Note field metadata
//!
//! Events carry a free-text note. Tags of the form `<Key:Value>` or `<Key>`
//! in that note become a key/value map, e.g. `<Name:Shopkeeper, 3>` gives
//! `Name => "Shopkeeper, 3"`.

use std::collections::HashMap;

/// Extracts `<Key:Value>` and `<Key>` tags from a note
///
/// - Keys may not contain `<`, `>` or `:`
/// - Values run up to the next `>` and may not contain `<`
/// - `<Key>` maps to an empty value
/// - A later tag overrides an earlier one with the same key
pub fn extract_metadata(note: &str) -> HashMap<String, String> {
    let mut meta = HashMap::new();
    let mut rest = note;

    while let Some(open) = rest.find('<') {
        let after_open = &rest[open + 1..];
        match parse_tag(after_open) {
            Some((key, value, consumed)) => {
                meta.insert(key.to_string(), value.to_string());
                rest = &after_open[consumed..];
            }
            None => rest = after_open,
        }
    }

    meta
}

/// Parses `Key>` or `Key:Value>` at the start of `text`
///
/// Returns the key, the value and the number of bytes consumed.
fn parse_tag(text: &str) -> Option<(&str, &str, usize)> {
    let key_end = text.find(['<', '>', ':'])?;
    if key_end == 0 {
        return None;
    }
    let key = &text[..key_end];

    match text.as_bytes()[key_end] {
        b'>' => Some((key, "", key_end + 1)),
        b':' => {
            let value_text = &text[key_end + 1..];
            let value_end = value_text.find(['<', '>'])?;
            if value_text.as_bytes()[value_end] != b'>' {
                return None;
            }
            Some((key, &value_text[..value_end], key_end + 1 + value_end + 1))
        }
        _ => None,
    }
}
