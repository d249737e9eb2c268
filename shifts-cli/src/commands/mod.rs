//! CLI command implementations.

pub mod list;
pub mod show;

use anyhow::{Context, Result};
use shifts_client::{
    FixedCoordinateProvider, HttpShiftsApi, ListController, MockShiftsApi, Navigator, ShiftsApi,
    ShiftsStore,
};
use shifts_core::ListPresentation;

use crate::config::Config;
use crate::demo;

/// Endpoint backed by the canned demo listings.
pub fn mock_api() -> MockShiftsApi {
    let api = MockShiftsApi::new();
    api.queue_shifts(demo::shifts());
    api
}

/// Endpoint client for the configured host.
pub fn http_api(config: &Config) -> Result<HttpShiftsApi> {
    HttpShiftsApi::new(config.api_config()).context("Failed to create HTTP client")
}

/// Fetch once and return a controller showing the result.
///
/// Fails when the fetch left nothing to show but an error.
pub async fn load<A, N>(
    api: A,
    config: &Config,
    navigator: N,
) -> Result<ListController<A, FixedCoordinateProvider, N>>
where
    A: ShiftsApi + 'static,
    N: Navigator,
{
    let location = FixedCoordinateProvider::new(config.coordinates()?);
    let store = ShiftsStore::new(api, location, config.store_config());
    let mut controller = ListController::new(store, navigator, config.window_config());

    if let Some(fetch) = controller.mount() {
        fetch.await;
    }
    controller.try_changed();

    if let ListPresentation::Error { message } = controller.view().presentation() {
        anyhow::bail!("{}", message);
    }
    Ok(controller)
}
