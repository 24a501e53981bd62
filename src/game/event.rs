//! Map events
//!
//! A `MapEvent` is the runtime side of an [`EventData`]: it tracks which
//! page is active and owns the overhead data shown above it.
//!
//! # Overhead resolution
//!
//! - At creation, explicit `Name`/`Picture` note annotations are read. If
//!   either exists, it is the event's overhead data for its whole lifetime.
//! - Otherwise the active page's comments are scanned at creation and again
//!   each time the active page changes.
//! - With no active page nothing is resolved and the previous data stays.

use super::flags::GameFlags;
use super::map_data::{EventData, EventPage};
use crate::config::OverlayConfig;
use crate::metadata::{extract_metadata, resolve_explicit, resolve_from_comments, OverheadData};
use crate::overhead::OverheadSource;
use tracing::debug;

pub struct MapEvent {
    data: EventData,
    pub x: i32,
    pub y: i32,
    page_index: Option<usize>,
    overhead: OverheadData,
    // Page seen by the last overhead resolution
    overhead_page_index: Option<usize>,
    has_explicit_overhead: bool,
}

impl MapEvent {
    pub fn new(data: EventData, flags: &GameFlags, config: &OverlayConfig) -> Self {
        let meta = extract_metadata(&data.note);
        let explicit = resolve_explicit(&meta, config);

        let mut event = MapEvent {
            x: data.x,
            y: data.y,
            data,
            page_index: None,
            has_explicit_overhead: explicit.is_some(),
            overhead: explicit.unwrap_or_default(),
            overhead_page_index: None,
        };
        event.refresh(flags);
        event.update_overhead_data(config);
        event
    }

    pub fn id(&self) -> u32 {
        self.data.id
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn page_index(&self) -> Option<usize> {
        self.page_index
    }

    pub fn page(&self) -> Option<&EventPage> {
        self.page_index.and_then(|i| self.data.pages.get(i))
    }

    /// Re-picks the active page: the last one whose conditions hold
    pub fn refresh(&mut self, flags: &GameFlags) {
        self.page_index = self
            .data
            .pages
            .iter()
            .rposition(|page| flags.meets(&page.conditions));
    }

    /// Per-frame update: re-resolves overhead data after a page change
    pub fn update(&mut self, flags: &GameFlags, config: &OverlayConfig) {
        self.refresh(flags);
        if self.page_index != self.overhead_page_index {
            self.update_overhead_data(config);
        }
    }

    fn update_overhead_data(&mut self, config: &OverlayConfig) {
        self.overhead_page_index = self.page_index;
        if self.has_explicit_overhead {
            return;
        }
        let Some(page) = self.page() else {
            return;
        };

        let overhead = resolve_from_comments(page.comments(), config);
        debug!(
            event = self.data.id,
            page = ?self.page_index,
            name = %overhead.name,
            picture = %overhead.picture,
            "resolved overhead data"
        );
        self.overhead = overhead;
    }
}

impl OverheadSource for MapEvent {
    fn overhead(&self) -> &OverheadData {
        &self.overhead
    }

    fn tile_position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::map_data::{EventCommand, PageConditions};

    fn page(comments: &[&str], switch: Option<u32>) -> EventPage {
        EventPage {
            conditions: PageConditions {
                switch1_valid: switch.is_some(),
                switch1_id: switch.unwrap_or(0),
                ..Default::default()
            },
            list: comments.iter().map(|c| EventCommand::comment(*c)).collect(),
        }
    }

    fn event_data(note: &str, pages: Vec<EventPage>) -> EventData {
        EventData {
            id: 1,
            name: "EV001".to_string(),
            note: note.to_string(),
            x: 3,
            y: 4,
            pages,
        }
    }

    #[test]
    fn test_comment_resolution_at_creation() {
        let data = event_data("", vec![page(&["<Name: Shopkeeper, 3>"], None)]);
        let event = MapEvent::new(data, &GameFlags::new(), &OverlayConfig::default());
        assert_eq!(event.overhead().name, "Shopkeeper");
        assert_eq!(event.overhead().name_range, 3);
        assert_eq!(event.tile_position(), (3, 4));
    }

    #[test]
    fn test_highest_eligible_page_wins() {
        let data = event_data("", vec![page(&[], None), page(&[], Some(1)), page(&[], Some(2))]);
        let mut flags = GameFlags::new();
        let mut event = MapEvent::new(data, &flags, &OverlayConfig::default());
        assert_eq!(event.page_index(), Some(0));

        flags.set_switch(1, true);
        event.refresh(&flags);
        assert_eq!(event.page_index(), Some(1));

        flags.set_switch(2, true);
        event.refresh(&flags);
        assert_eq!(event.page_index(), Some(2));
    }

    #[test]
    fn test_page_change_clears_overhead() {
        let data = event_data(
            "",
            vec![
                page(&["<Name: Guard, 2>", "<Picture: Shield, 2>"], None),
                page(&["nothing to see"], Some(1)),
            ],
        );
        let config = OverlayConfig::default();
        let mut flags = GameFlags::new();
        let mut event = MapEvent::new(data, &flags, &config);
        assert_eq!(event.overhead().picture, "Shield");

        flags.set_switch(1, true);
        event.update(&flags, &config);
        assert_eq!(event.overhead(), &OverheadData::default());

        flags.set_switch(1, false);
        event.update(&flags, &config);
        assert_eq!(event.overhead().name, "Guard");
    }

    #[test]
    fn test_explicit_annotation_is_permanent() {
        let data = event_data(
            "<Picture: Icon1, 0>",
            vec![page(&[], None), page(&["<Name: Other, 1>"], Some(1))],
        );
        let config = OverlayConfig::default();
        let mut flags = GameFlags::new();
        let mut event = MapEvent::new(data, &flags, &config);
        assert_eq!(event.overhead().picture, "Icon1");
        assert_eq!(event.overhead().picture_range, 5);

        flags.set_switch(1, true);
        event.update(&flags, &config);
        assert_eq!(event.overhead().picture, "Icon1");
        assert!(event.overhead().name.is_empty());
    }

    #[test]
    fn test_no_active_page_keeps_data() {
        let data = event_data("", vec![page(&["<Name: Ghost, 2>"], Some(1))]);
        let config = OverlayConfig::default();
        let mut flags = GameFlags::new();
        flags.set_switch(1, true);
        let mut event = MapEvent::new(data, &flags, &config);
        assert_eq!(event.overhead().name, "Ghost");

        flags.set_switch(1, false);
        event.update(&flags, &config);
        assert_eq!(event.page_index(), None);
        assert_eq!(event.overhead().name, "Ghost");
    }

    #[test]
    fn test_event_without_pages_is_unlabeled() {
        let event = MapEvent::new(event_data("", vec![]), &GameFlags::new(), &OverlayConfig::default());
        assert!(event.page().is_none());
        assert_eq!(event.overhead(), &OverheadData::default());
    }
}
