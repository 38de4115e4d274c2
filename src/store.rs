//! Screen State
//!
//! Per-screen state, owned by the screen and rebuilt on every mount.

use leptos::prelude::*;
use reactive_stores::Store;
use scout_data::{MapLocation, SavedResource};

use crate::filters::{self, FILTER_ALL};

// ========================
// Home
// ========================

/// Category grid selection: clicking the selected category clears it,
/// clicking another replaces it
pub fn toggle_category(current: Option<&str>, clicked: &str) -> Option<String> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked.to_string())
    }
}

// ========================
// Locker
// ========================

/// Locker screen state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct LockerState {
    /// Saved resources as loaded on mount
    pub saved: Vec<SavedResource>,
    /// Active filter chip; `"all"` or a category
    pub filter: String,
    /// Whether the initial load finished
    pub loaded: bool,
}

impl LockerState {
    pub fn new() -> Self {
        Self {
            saved: Vec::new(),
            filter: FILTER_ALL.to_string(),
            loaded: false,
        }
    }

    pub fn categories(&self) -> Vec<String> {
        filters::filter_categories(&self.saved)
    }

    pub fn filtered(&self) -> Vec<SavedResource> {
        filters::filter_resources(&self.saved, &self.filter)
    }

    /// Empty state is shown only once loading finished with nothing to show
    pub fn shows_empty_state(&self) -> bool {
        self.loaded && self.filtered().is_empty()
    }
}

impl Default for LockerState {
    fn default() -> Self {
        Self::new()
    }
}

pub type LockerStore = Store<LockerState>;

/// Replace the saved list after a load
pub fn store_set_saved(store: &LockerStore, saved: Vec<SavedResource>) {
    store.saved().set(saved);
    store.loaded().set(true);
}

/// Activate a filter chip
pub fn store_set_filter(store: &LockerStore, filter: String) {
    store.filter().set(filter);
}

// ========================
// Map
// ========================

/// Map screen state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapState {
    pub locations: Vec<MapLocation>,
    pub selected: Option<MapLocation>,
    /// List presentation instead of the map surface
    pub is_list_view: bool,
    /// Detail card opened by the latest selection event
    pub card_open: bool,
}

impl MapState {
    pub fn select(&mut self, location: MapLocation) {
        self.selected = Some(location);
        self.card_open = true;
    }

    /// Switch presentation; the selection stays but the card closes
    pub fn toggle_view(&mut self) {
        self.is_list_view = !self.is_list_view;
        self.card_open = false;
    }

    /// Close action on the detail card
    pub fn close_card(&mut self) {
        self.selected = None;
        self.card_open = false;
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_ref().is_some_and(|l| l.id == id)
    }

    /// Location for the detail card, suppressed in list presentation
    pub fn card_location(&self) -> Option<&MapLocation> {
        if self.is_list_view || !self.card_open {
            return None;
        }
        self.selected.as_ref()
    }
}

/// Locations of the map screen, notifying only when the list itself changes
pub fn map_locations_memo(state: RwSignal<MapState>) -> Memo<Vec<MapLocation>> {
    Memo::new(move |_| state.with(|s| s.locations.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_data::seed;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_toggle_same_category_twice_clears() {
        let selected = toggle_category(None, "food");
        assert_eq!(selected.as_deref(), Some("food"));
        assert_eq!(toggle_category(selected.as_deref(), "food"), None);
    }

    #[test]
    fn test_toggle_other_category_replaces() {
        let selected = toggle_category(Some("food"), "legal");
        assert_eq!(selected.as_deref(), Some("legal"));
    }

    #[test]
    fn test_locker_state_defaults() {
        let state = LockerState::new();
        assert_eq!(state.filter, "all");
        assert!(!state.shows_empty_state());
    }

    #[test]
    fn test_locker_empty_after_load() {
        let state = LockerState { loaded: true, ..LockerState::new() };
        assert!(state.shows_empty_state());
        assert_eq!(state.categories(), vec!["all"]);
    }

    #[test]
    fn test_locker_filter_food() {
        let state = LockerState {
            saved: seed::saved_resources(),
            filter: "Food".to_string(),
            loaded: true,
        };
        assert_eq!(state.categories(), vec!["all", "Food", "Services", "Shelter"]);
        let filtered = state.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Community Food Bank");
        assert!(!state.shows_empty_state());
    }

    fn map_state() -> MapState {
        MapState { locations: seed::map_locations(), ..MapState::default() }
    }

    #[test]
    fn test_map_defaults_to_map_view() {
        let state = map_state();
        assert!(!state.is_list_view);
        assert!(state.card_location().is_none());
    }

    #[test]
    fn test_select_opens_card() {
        let mut state = map_state();
        let location = state.locations[1].clone();
        state.select(location);

        assert!(state.is_selected("2"));
        assert!(!state.is_selected("1"));
        assert_eq!(state.card_location().map(|l| l.name.as_str()), Some("Veterans Support Center"));
    }

    #[test]
    fn test_select_replaces_previous() {
        let mut state = map_state();
        state.select(state.locations[0].clone());
        state.select(state.locations[2].clone());
        let selected: Vec<&str> = state
            .locations
            .iter()
            .filter(|l| state.is_selected(&l.id))
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(selected, vec!["3"]);
    }

    #[test]
    fn test_list_view_hides_card_and_keeps_selection() {
        let mut state = map_state();
        state.select(state.locations[0].clone());

        state.toggle_view();
        assert!(state.is_list_view);
        assert!(state.card_location().is_none());
        assert!(state.is_selected("1"));

        // back to the map: no card until a new selection
        state.toggle_view();
        assert!(!state.is_list_view);
        assert!(state.card_location().is_none());
        assert!(state.is_selected("1"));

        state.select(state.locations[0].clone());
        assert!(state.card_location().is_some());
    }

    #[test]
    fn test_selection_in_list_view_shows_no_card() {
        let mut state = map_state();
        state.toggle_view();
        state.select(state.locations[3].clone());
        assert!(state.is_selected("4"));
        assert!(state.card_location().is_none());
    }

    #[test]
    fn test_locations_memo_ignores_selection_changes() {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(map_state());
            let locations = map_locations_memo(state);
            let builds = Arc::new(AtomicUsize::new(0));
            let pin_count = {
                let builds = Arc::clone(&builds);
                Memo::new(move |_| {
                    builds.fetch_add(1, Ordering::SeqCst);
                    locations.with(|l| l.len())
                })
            };
            assert_eq!(pin_count.get(), 4);

            state.update(|s| {
                let location = s.locations[0].clone();
                s.select(location);
            });
            state.update(|s| s.toggle_view());
            state.update(|s| s.close_card());
            assert_eq!(pin_count.get(), 4);
            assert_eq!(builds.load(Ordering::SeqCst), 1);

            state.update(|s| {
                s.locations.pop();
            });
            assert_eq!(pin_count.get(), 3);
            assert_eq!(builds.load(Ordering::SeqCst), 2);
        });
    }

    #[test]
    fn test_close_clears_selection() {
        let mut state = map_state();
        state.select(state.locations[0].clone());
        state.close_card();
        assert!(state.selected.is_none());
        assert!(state.card_location().is_none());
    }
}
