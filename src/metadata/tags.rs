//! Overhead tag parsing
//!
//! Two syntaxes carry a display name or picture:
//!
//! - note annotations, already split into key/value by [`super::note`]:
//!   `Name` => `"NAME, RANGE"`
//! - inline comment text: `<name: NAME, RANGE>` / `<picture: NAME, RANGE>`
//!   (case-insensitive)
//!
//! Both produce a [`DisplayTag`].

use tracing::warn;

/// A parsed display value and its visibility range in tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTag {
    pub value: String,
    pub range: u32,
}

/// Which inline tag to look for in comment text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Name,
    Picture,
}

impl TagKind {
    /// Lowercase opening of the inline tag, including the colon
    fn opening(self) -> &'static str {
        match self {
            TagKind::Name => "<name:",
            TagKind::Picture => "<picture:",
        }
    }
}

/// Parses a note annotation value of the form `NAME, RANGE`
///
/// - One leading space is removed from NAME
/// - Text after a second comma is ignored
/// - A RANGE that is missing, 0 or not a number becomes `default_range`
///
/// # Example
///
/// ```
/// use event_names::metadata::tags::parse_annotation;
///
/// let tag = parse_annotation(" Icon1, 0", 5);
/// assert_eq!(tag.value, "Icon1");
/// assert_eq!(tag.range, 5);
/// ```
pub fn parse_annotation(raw: &str, default_range: u32) -> DisplayTag {
    let mut parts = raw.split(',');
    let name = parts.next().unwrap_or_default();
    let name = name.strip_prefix(' ').unwrap_or(name);

    let range = match parts.next().map(str::trim) {
        None | Some("") => default_range,
        Some(text) => match text.parse::<u32>() {
            Ok(0) => default_range,
            Ok(range) => range,
            Err(_) => {
                warn!(annotation = raw, "range is not a number, using {}", default_range);
                default_range
            }
        },
    };

    DisplayTag {
        value: name.to_string(),
        range,
    }
}

/// Finds the first inline tag of `kind` in one comment line
///
/// Follows `<kind:` + spaces + NAME + `,` + spaces + digits + `>`. NAME is
/// greedy, so with several commas the last one followed by a range wins.
/// Matching stops at a newline. A range too large for `u32` becomes
/// `default_range`; otherwise the digits are used as written, 0 included.
pub fn find_inline_tag(text: &str, kind: TagKind, default_range: u32) -> Option<DisplayTag> {
    let opening = kind.opening();
    let mut search_from = 0;

    while let Some(offset) = find_ignore_ascii_case(&text[search_from..], opening) {
        let start = search_from + offset;
        let body_start = start + opening.len();
        let line = &text[body_start..];
        let line = &line[..line.find('\n').unwrap_or(line.len())];
        let line = line.trim_start_matches(' ');

        if let Some((name, digits)) = split_name_and_range(line) {
            let range = digits.parse::<u32>().unwrap_or_else(|_| {
                warn!(comment = text, "range out of bounds, using {}", default_range);
                default_range
            });
            return Some(DisplayTag {
                value: name.to_string(),
                range,
            });
        }

        search_from = start + 1;
    }

    None
}

/// Splits `NAME, RANGE>...` at the last comma that is followed by
/// spaces, digits and `>`
fn split_name_and_range(line: &str) -> Option<(&str, &str)> {
    line.rmatch_indices(',').find_map(|(comma, _)| {
        let after = line[comma + 1..].trim_start_matches(' ');
        let digits_len = after.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len > 0 && after.as_bytes().get(digits_len) == Some(&b'>') {
            Some((&line[..comma], &after[..digits_len]))
        } else {
            None
        }
    })
}

/// Byte offset of the first case-insensitive occurrence of an ASCII needle
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_with_range() {
        let tag = parse_annotation("Shopkeeper, 3", 5);
        assert_eq!(tag, DisplayTag { value: "Shopkeeper".into(), range: 3 });
    }

    #[test]
    fn test_annotation_zero_or_missing_range_uses_default() {
        assert_eq!(parse_annotation("Bob, 0", 5).range, 5);
        assert_eq!(parse_annotation("Bob", 5).range, 5);
        assert_eq!(parse_annotation("Bob,", 7).range, 7);
    }

    #[test]
    fn test_annotation_bad_range_uses_default() {
        assert_eq!(parse_annotation("Bob, far", 5).range, 5);
        assert_eq!(parse_annotation("Bob, -2", 5).range, 5);
    }

    #[test]
    fn test_annotation_trims_one_space_only() {
        assert_eq!(parse_annotation("  Bob, 2", 5).value, " Bob");
        assert_eq!(parse_annotation(" Bob, 2", 5).value, "Bob");
    }

    #[test]
    fn test_inline_name_case_insensitive() {
        let tag = find_inline_tag("<Name: Shopkeeper, 3>", TagKind::Name, 5).unwrap();
        assert_eq!(tag.value, "Shopkeeper");
        assert_eq!(tag.range, 3);
        assert!(find_inline_tag("<NAME:Guard,1>", TagKind::Name, 5).is_some());
    }

    #[test]
    fn test_inline_zero_range_is_literal() {
        let tag = find_inline_tag("<picture: Icon1, 0>", TagKind::Picture, 5).unwrap();
        assert_eq!(tag.value, "Icon1");
        assert_eq!(tag.range, 0);
    }

    #[test]
    fn test_inline_name_is_greedy() {
        let tag = find_inline_tag("<name: Smith, the Elder, 4>", TagKind::Name, 5).unwrap();
        assert_eq!(tag.value, "Smith, the Elder");
        assert_eq!(tag.range, 4);
    }

    #[test]
    fn test_inline_requires_digits() {
        assert!(find_inline_tag("<name: Bob, far>", TagKind::Name, 5).is_none());
        assert!(find_inline_tag("<name: Bob 3>", TagKind::Name, 5).is_none());
    }

    #[test]
    fn test_inline_does_not_cross_lines() {
        assert!(find_inline_tag("<name: Bob\n, 3>", TagKind::Name, 5).is_none());
    }

    #[test]
    fn test_inline_skips_incomplete_first_tag() {
        let tag = find_inline_tag("<name: broken> <name: Ann, 2>", TagKind::Name, 5).unwrap();
        // Greedy NAME starts at the first opening that can complete
        assert_eq!(tag.value, "broken> <name: Ann");
        assert_eq!(tag.range, 2);
    }

    #[test]
    fn test_inline_kinds_are_independent() {
        let text = "<picture: Star, 2>";
        assert!(find_inline_tag(text, TagKind::Name, 5).is_none());
        assert!(find_inline_tag(text, TagKind::Picture, 5).is_some());
    }

    #[test]
    fn test_inline_overflow_uses_default() {
        let tag = find_inline_tag("<name: Bob, 99999999999>", TagKind::Name, 5).unwrap();
        assert_eq!(tag.range, 5);
    }

    #[test]
    fn test_non_ascii_names() {
        let tag = find_inline_tag("<name: Händler, 2>", TagKind::Name, 5).unwrap();
        assert_eq!(tag.value, "Händler");
    }
}
