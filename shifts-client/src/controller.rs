//! List controller - binds a windowed list to a [`ShiftsStore`].
//!
//! The controller starts one fetch on mount, rebuilds its
//! [`ShiftListView`] from every snapshot the store publishes, and turns row
//! activations into [`NavigationIntent`]s for the [`Navigator`].

use std::future::Future;

use shifts_core::{
    ListPresentation, NavigationIntent, ShiftListView, ShiftRow, StoreState, Viewport,
    WindowConfig,
};
use shifts_types::ShiftId;
use tokio::sync::mpsc;

use crate::api::ShiftsApi;
use crate::location::LocationProvider;
use crate::store::ShiftsStore;

/// Receives navigation to the details screen.
pub trait Navigator: Send + Sync {
    /// Show details of the selected shift.
    fn navigate_to_details(&self, intent: NavigationIntent);
}

impl<F> Navigator for F
where
    F: Fn(NavigationIntent) + Send + Sync,
{
    fn navigate_to_details(&self, intent: NavigationIntent) {
        self(intent)
    }
}

/// Keeps a list view in step with the store.
pub struct ListController<A, L, N> {
    store: ShiftsStore<A, L>,
    navigator: N,
    window: WindowConfig,
    updates: mpsc::UnboundedReceiver<StoreState>,
    view: ShiftListView,
    mounted: bool,
}

impl<A, L, N> ListController<A, L, N>
where
    A: ShiftsApi + 'static,
    L: LocationProvider + 'static,
    N: Navigator,
{
    /// Subscribe to `store`. Nothing is fetched until [`mount`](Self::mount).
    pub fn new(store: ShiftsStore<A, L>, navigator: N, window: WindowConfig) -> Self {
        let mut updates = store.subscribe();
        // subscribe() always delivers the current snapshot first
        let view = match updates.try_recv() {
            Ok(state) => ShiftListView::new(&state),
            Err(_) => ShiftListView::new(&store.snapshot()),
        };
        Self {
            store,
            navigator,
            window,
            updates,
            view,
            mounted: false,
        }
    }

    /// Start the initial fetch when the list first appears.
    ///
    /// Returns `None` if the controller was already mounted.
    pub fn mount(&mut self) -> Option<impl Future<Output = ()> + Send + 'static> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        tracing::debug!("list mounted, fetching shifts");
        Some(self.store.fetch_shifts())
    }

    /// Whether [`mount`](Self::mount) has run.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Pull-to-refresh.
    pub fn refresh(&self) -> impl Future<Output = ()> + Send + 'static {
        self.store.fetch_shifts()
    }

    /// Retry after a failed first load.
    ///
    /// Returns `None` unless the list is showing the error placeholder.
    pub fn retry(&self) -> Option<impl Future<Output = ()> + Send + 'static> {
        match self.view.presentation() {
            ListPresentation::Error { .. } => Some(self.store.fetch_shifts()),
            _ => None,
        }
    }

    /// The current view.
    pub fn view(&self) -> &ShiftListView {
        &self.view
    }

    /// The window configuration.
    pub fn window(&self) -> &WindowConfig {
        &self.window
    }

    /// The store this controller is bound to.
    pub fn store(&self) -> &ShiftsStore<A, L> {
        &self.store
    }

    /// Wait for the next published snapshot and rebuild the view from it.
    ///
    /// Returns `false` if no further snapshots can arrive.
    pub async fn changed(&mut self) -> bool {
        match self.updates.recv().await {
            Some(state) => {
                self.view = ShiftListView::new(&state);
                true
            }
            None => false,
        }
    }

    /// Apply every snapshot already published. Returns how many were applied.
    pub fn try_changed(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(state) = self.updates.try_recv() {
            self.view = ShiftListView::new(&state);
            applied += 1;
        }
        applied
    }

    /// Display rows for the given viewport.
    pub fn visible_rows(&self, viewport: Viewport) -> Vec<ShiftRow> {
        let range = self.view.visible_range(&self.window, viewport);
        self.view.rows(range)
    }

    /// Activate the row at `index` and navigate to it.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for the current view.
    pub fn activate(&self, index: usize) -> NavigationIntent {
        let intent = self.view.activate(index);
        tracing::debug!(id = %intent.selected_shift.id, "navigating to shift details");
        self.navigator.navigate_to_details(intent.clone());
        intent
    }

    /// Activate the row with the given key. Returns `false` if no row has it.
    pub fn activate_key(&self, key: &ShiftId) -> bool {
        match self.view.position_of(key) {
            Some(index) => {
                self.activate(index);
                true
            }
            None => false,
        }
    }
}
