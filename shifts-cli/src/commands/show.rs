//! Show the details of one shift.

use anyhow::Result;
use shifts_client::{ListController, LocationProvider, Navigator, ShiftsApi};
use shifts_core::NavigationIntent;
use shifts_types::display;
use shifts_types::{ShiftId, ShiftRecord};

use super::{http_api, load, mock_api};
use crate::config::Config;

/// Run the show command.
pub async fn run(config: &Config, use_mock: bool, id: &str) -> Result<()> {
    let key = ShiftId::new(id);
    let navigator = |intent: NavigationIntent| print_details(&intent.selected_shift);
    if use_mock {
        let controller = load(mock_api(), config, navigator).await?;
        open(&controller, &key)
    } else {
        let controller = load(http_api(config)?, config, navigator).await?;
        open(&controller, &key)
    }
}

fn open<A, L, N>(controller: &ListController<A, L, N>, key: &ShiftId) -> Result<()>
where
    A: ShiftsApi + 'static,
    L: LocationProvider + 'static,
    N: Navigator,
{
    if !controller.activate_key(key) {
        anyhow::bail!("No shift with id {}", key);
    }
    Ok(())
}

fn print_details(shift: &ShiftRecord) {
    let logo = match &shift.logo {
        Some(url) => url.clone(),
        None => format!("[{}]", display::logo_initial(shift)),
    };

    println!("=== {} ===", shift.company_name);
    println!("Logo:    {}", logo);
    println!("Address: {}", shift.address);
    if let Some(rating) = display::rating_label(shift) {
        println!("Rating:  {}", rating);
    }
    println!();
    println!("Date:    {}", shift.date_start_by_city);
    println!(
        "Time:    {} - {}",
        shift.time_start_by_city, shift.time_end_by_city
    );
    if !shift.work_types.is_empty() {
        println!("Work:    {}", display::work_types_label(shift));
        for work_type in &shift.work_types {
            let needed = u64::from(shift.plan_workers);
            println!(
                "         {} {}",
                needed,
                display::work_type_plural(work_type, needed)
            );
        }
    }
    println!("Staff:   {}", display::staffing_label(shift));
    println!();
    println!(
        "Rate:    {} + {} bonus = {}",
        display::price_label(shift.price_worker),
        display::price_label(shift.bonus_price_worker),
        display::price_label(display::total_price(shift))
    );
    println!("Map:     {}", display::map_url(shift));
    println!();
    match display::booking_label(shift) {
        Some(label) => println!("> {}", label),
        None => println!("Fully staffed"),
    }
}
