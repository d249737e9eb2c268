//! List rendering contract over a store snapshot.
//!
//! [`ShiftListView`] is what a windowed list reads: a count, positional
//! access, stable keys, the placeholder to show when there are no rows, and
//! the navigation intent produced when a row is activated. It wraps one
//! [`StoreState`] snapshot, so a view can never report a count that differs
//! from the items it indexes. Rebuild it from every published snapshot.

use std::collections::HashSet;
use std::ops::Range;
use std::sync::Arc;

use shifts_types::display;
use shifts_types::{ShiftId, ShiftRecord};

use crate::state::StoreState;
use crate::window::{Viewport, WindowConfig};

/// What the list area should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPresentation {
    /// First load in progress, nothing to show yet.
    Loading,
    /// Nothing loaded and the last fetch failed. Offers a retry.
    Error {
        /// Message to display.
        message: String,
    },
    /// Loaded successfully, but the list is empty.
    Empty,
    /// Rows are available.
    Rows {
        /// A refresh is in flight (pull-to-refresh indicator).
        refreshing: bool,
        /// The most recent refresh failed; the rows are last-known-good.
        stale_error: Option<String>,
    },
}

/// Outbound navigation event carrying the selected record itself.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationIntent {
    /// The record the user activated.
    pub selected_shift: ShiftRecord,
}

/// Read-only view of one store snapshot, shaped for a windowed list.
#[derive(Debug, Clone)]
pub struct ShiftListView {
    items: Arc<[ShiftRecord]>,
    loading: bool,
    error: Option<String>,
}

impl ShiftListView {
    /// Build a view from a snapshot.
    pub fn new(state: &StoreState) -> Self {
        Self {
            items: Arc::clone(&state.items),
            loading: state.loading,
            error: state.error.clone(),
        }
    }

    /// Number of rows.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Row at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.count()`. The windowing engine only asks for
    /// indices it got from [`ShiftListView::visible_range`].
    pub fn item_at(&self, index: usize) -> &ShiftRecord {
        &self.items[index]
    }

    /// Row at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&ShiftRecord> {
        self.items.get(index)
    }

    /// Stable diffing key of a row.
    pub fn key_of(item: &ShiftRecord) -> &ShiftId {
        &item.id
    }

    /// Index of the row with the given key.
    pub fn position_of(&self, key: &ShiftId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == key)
    }

    /// Keys that occur more than once. Empty for well-formed data.
    pub fn duplicate_keys(&self) -> Vec<ShiftId> {
        let mut seen = HashSet::with_capacity(self.items.len());
        let mut dupes = Vec::new();
        for item in self.items.iter() {
            if !seen.insert(&item.id) && !dupes.contains(&item.id) {
                dupes.push(item.id.clone());
            }
        }
        dupes
    }

    /// True while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error from the most recent fetch.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Which affordance the list area should render.
    pub fn presentation(&self) -> ListPresentation {
        if self.items.is_empty() {
            if self.loading {
                ListPresentation::Loading
            } else if let Some(message) = &self.error {
                ListPresentation::Error {
                    message: message.clone(),
                }
            } else {
                ListPresentation::Empty
            }
        } else {
            ListPresentation::Rows {
                refreshing: self.loading,
                stale_error: self.error.clone(),
            }
        }
    }

    /// Rows to materialize for the given viewport.
    pub fn visible_range(&self, config: &WindowConfig, viewport: Viewport) -> Range<usize> {
        config.visible_range(self.count(), viewport)
    }

    /// Project the rows of `range` into display rows.
    pub fn rows(&self, range: Range<usize>) -> Vec<ShiftRow> {
        self.items[range].iter().map(ShiftRow::project).collect()
    }

    /// Navigation intent for activating the row at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.count()`.
    pub fn activate(&self, index: usize) -> NavigationIntent {
        NavigationIntent {
            selected_shift: self.item_at(index).clone(),
        }
    }
}

/// A list row: the record projected to the strings a row displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftRow {
    /// Row key (the shift id).
    pub key: ShiftId,
    /// Employer name.
    pub company_name: String,
    /// Street address.
    pub address: String,
    /// Start date.
    pub date: String,
    /// "09:00 - 18:00".
    pub time_range: String,
    /// Total rate, e.g. "$2800".
    pub price: String,
    /// "2 spots", absent when fully staffed.
    pub spots: Option<String>,
    /// Whether the row gets the fully-staffed style.
    pub fully_staffed: bool,
    /// Whether the promotion badge is shown.
    pub promoted: bool,
}

impl ShiftRow {
    /// Pure projection of a record into a row.
    pub fn project(shift: &ShiftRecord) -> Self {
        let fully_staffed = display::is_fully_staffed(shift);
        Self {
            key: shift.id.clone(),
            company_name: shift.company_name.clone(),
            address: shift.address.clone(),
            date: shift.date_start_by_city.clone(),
            time_range: format!("{} - {}", shift.time_start_by_city, shift.time_end_by_city),
            price: display::price_label(display::total_price(shift)),
            spots: (!fully_staffed).then(|| display::spots_label(display::available_spots(shift))),
            fully_staffed,
            promoted: shift.is_promotion_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shifts_types::Coordinates;

    fn record(id: &str) -> ShiftRecord {
        ShiftRecord {
            id: ShiftId::new(id),
            coordinates: Coordinates::new(55.75, 37.61),
            address: format!("Street {}", id),
            company_name: format!("Company {}", id),
            logo: None,
            date_start_by_city: "12.05.2025".into(),
            time_start_by_city: "09:00".into(),
            time_end_by_city: "18:00".into(),
            current_workers: 1,
            plan_workers: 3,
            work_types: vec![],
            price_worker: 2000.0,
            bonus_price_worker: 500.0,
            customer_feedbacks_count: "0".into(),
            customer_rating: None,
            is_promotion_enabled: false,
        }
    }

    fn state(items: Vec<ShiftRecord>, loading: bool, error: Option<&str>) -> StoreState {
        StoreState {
            items: Arc::from(items),
            loading,
            error: error.map(str::to_string),
            location: None,
        }
    }

    // ===========================================
    // Positional access
    // ===========================================

    #[test]
    fn count_matches_snapshot_items() {
        let s = state(vec![record("1"), record("2"), record("3")], false, None);
        let view = ShiftListView::new(&s);
        assert_eq!(view.count(), s.items.len());
    }

    #[test]
    fn reads_are_idempotent() {
        let view = ShiftListView::new(&state(vec![record("1"), record("2")], false, None));
        let first = (view.count(), view.item_at(1).clone());
        let second = (view.count(), view.item_at(1).clone());
        assert_eq!(first, second);
    }

    #[test]
    fn item_at_returns_items_in_order() {
        let view = ShiftListView::new(&state(vec![record("a"), record("b")], false, None));
        assert_eq!(view.item_at(0).id, ShiftId::new("a"));
        assert_eq!(view.item_at(1).id, ShiftId::new("b"));
        assert!(view.get(2).is_none());
    }

    #[test]
    #[should_panic]
    fn item_at_out_of_range_panics() {
        let view = ShiftListView::new(&state(vec![record("a")], false, None));
        let _ = view.item_at(1);
    }

    #[test]
    fn new_snapshot_new_count() {
        let old = ShiftListView::new(&state(vec![record("a"), record("b")], false, None));
        let new = ShiftListView::new(&state(vec![record("c")], false, None));
        assert_eq!(old.count(), 2);
        assert_eq!(new.count(), 1);
    }

    // ===========================================
    // Keys
    // ===========================================

    #[test]
    fn key_is_record_id() {
        let r = record("42");
        assert_eq!(ShiftListView::key_of(&r), &ShiftId::new("42"));
    }

    #[test]
    fn unique_keys_have_no_duplicates() {
        let view = ShiftListView::new(&state(vec![record("1"), record("2")], false, None));
        assert!(view.duplicate_keys().is_empty());
    }

    #[test]
    fn duplicate_keys_are_reported_once() {
        let view = ShiftListView::new(&state(
            vec![record("1"), record("2"), record("1"), record("1")],
            false,
            None,
        ));
        assert_eq!(view.duplicate_keys(), vec![ShiftId::new("1")]);
    }

    #[test]
    fn position_of_finds_key() {
        let view = ShiftListView::new(&state(vec![record("a"), record("42")], false, None));
        assert_eq!(view.position_of(&ShiftId::new("42")), Some(1));
        assert_eq!(view.position_of(&ShiftId::new("nope")), None);
    }

    // ===========================================
    // Presentation
    // ===========================================

    #[test]
    fn empty_and_idle_shows_empty_state() {
        let view = ShiftListView::new(&state(vec![], false, None));
        assert_eq!(view.presentation(), ListPresentation::Empty);
    }

    #[test]
    fn empty_and_loading_shows_loading_not_empty() {
        let view = ShiftListView::new(&state(vec![], true, None));
        assert_eq!(view.presentation(), ListPresentation::Loading);
    }

    #[test]
    fn empty_with_error_shows_error() {
        let view = ShiftListView::new(&state(vec![], false, Some("Failed to fetch shifts")));
        assert_eq!(
            view.presentation(),
            ListPresentation::Error {
                message: "Failed to fetch shifts".into()
            }
        );
    }

    #[test]
    fn rows_win_over_loading_and_error() {
        let view = ShiftListView::new(&state(vec![record("1")], true, Some("boom")));
        assert_eq!(
            view.presentation(),
            ListPresentation::Rows {
                refreshing: true,
                stale_error: Some("boom".into())
            }
        );
    }

    // ===========================================
    // Activation and rows
    // ===========================================

    #[test]
    fn activation_carries_exact_record() {
        let mut target = record("42");
        target.customer_rating = Some(4.9);
        let view = ShiftListView::new(&state(vec![record("1"), target.clone()], false, None));

        let index = view.position_of(&ShiftId::new("42")).unwrap();
        let intent = view.activate(index);

        assert_eq!(intent.selected_shift, target);
    }

    #[test]
    fn row_projection() {
        let row = ShiftRow::project(&record("7"));
        assert_eq!(row.key, ShiftId::new("7"));
        assert_eq!(row.company_name, "Company 7");
        assert_eq!(row.time_range, "09:00 - 18:00");
        assert_eq!(row.price, "$2500");
        assert_eq!(row.spots.as_deref(), Some("2 spots"));
        assert!(!row.fully_staffed);
        assert!(!row.promoted);
    }

    #[test]
    fn fully_staffed_row_has_no_spots() {
        let mut r = record("7");
        r.current_workers = 5;
        let row = ShiftRow::project(&r);
        assert!(row.fully_staffed);
        assert!(row.spots.is_none());
    }

    #[test]
    fn rows_follow_visible_range() {
        let items: Vec<_> = (0..30).map(|i| record(&i.to_string())).collect();
        let view = ShiftListView::new(&state(items, false, None));
        let config = WindowConfig::default().with_row_height(100).with_overscan(0);

        let range = view.visible_range(&config, Viewport::new(1000, 300));
        let rows = view.rows(range);

        let keys: Vec<_> = rows.iter().map(|r| r.key.as_str().to_string()).collect();
        assert_eq!(keys, vec!["10", "11", "12"]);
    }
}
