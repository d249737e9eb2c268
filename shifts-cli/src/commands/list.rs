//! List shifts near the configured position.

use anyhow::Result;
use shifts_client::{ListController, LocationProvider, Navigator, ShiftsApi};
use shifts_core::{ListPresentation, NavigationIntent, ShiftRow, Viewport};

use super::{http_api, load, mock_api};
use crate::config::Config;

/// Run the list command.
pub async fn run(config: &Config, use_mock: bool, viewport: Viewport) -> Result<()> {
    // Listing never navigates.
    let navigator = |_: NavigationIntent| {};
    if use_mock {
        let controller = load(mock_api(), config, navigator).await?;
        print_list(&controller, viewport);
    } else {
        let controller = load(http_api(config)?, config, navigator).await?;
        print_list(&controller, viewport);
    }
    Ok(())
}

fn print_list<A, L, N>(controller: &ListController<A, L, N>, viewport: Viewport)
where
    A: ShiftsApi + 'static,
    L: LocationProvider + 'static,
    N: Navigator,
{
    let view = controller.view();
    let near = controller
        .store()
        .location()
        .map(|c| format!(" near {}", c))
        .unwrap_or_default();

    match view.presentation() {
        ListPresentation::Empty => {
            println!("No shifts available{}.", near);
        }
        // load() never returns while loading or on a bare error
        ListPresentation::Loading | ListPresentation::Error { .. } => {}
        ListPresentation::Rows { stale_error, .. } => {
            let range = view.visible_range(controller.window(), viewport);
            if range.is_empty() {
                println!("{} shifts{} (no rows in view)", view.count(), near);
            } else {
                println!(
                    "{} shifts{} (showing {}-{})",
                    view.count(),
                    near,
                    range.start + 1,
                    range.end
                );
            }
            if let Some(error) = stale_error {
                println!("warning: {}", error);
            }
            for row in controller.visible_rows(viewport) {
                println!();
                print_row(&row);
            }
        }
    }
}

fn print_row(row: &ShiftRow) {
    let badge = if row.promoted { "  [promo]" } else { "" };
    println!("[{}] {}{}", row.key, row.company_name, badge);
    println!("  {}", row.address);
    println!("  {}  {}", row.date, row.time_range);
    match &row.spots {
        Some(spots) => println!("  {}  {}", row.price, spots),
        None => println!("  {}  fully staffed", row.price),
    }
}
