//! Stateless display projections of a [`ShiftRecord`].
//!
//! Everything here is a pure function of a single record, so any rendering
//! layer (terminal, GUI, FFI) can call it without touching the store.

use crate::record::{ShiftRecord, WorkType};

/// Base rate plus bonus.
pub fn total_price(shift: &ShiftRecord) -> f64 {
    shift.price_worker + shift.bonus_price_worker
}

/// True once booked workers reach the plan. Over-booking counts as staffed.
pub fn is_fully_staffed(shift: &ShiftRecord) -> bool {
    shift.current_workers >= shift.plan_workers
}

/// Open spots left, zero when full or over-booked.
pub fn available_spots(shift: &ShiftRecord) -> u32 {
    shift.plan_workers.saturating_sub(shift.current_workers)
}

/// "1 spot", "3 spots".
pub fn spots_label(spots: u32) -> String {
    if spots == 1 {
        "1 spot".to_string()
    } else {
        format!("{} spots", spots)
    }
}

/// "3/5 workers (2 available)", or "5/5 workers" when fully staffed.
pub fn staffing_label(shift: &ShiftRecord) -> String {
    let base = format!("{}/{} workers", shift.current_workers, shift.plan_workers);
    if is_fully_staffed(shift) {
        base
    } else {
        format!("{} ({} available)", base, available_spots(shift))
    }
}

/// Work type names joined with ", ".
pub fn work_types_label(shift: &ShiftRecord) -> String {
    shift
        .work_types
        .iter()
        .map(|w| w.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Pick the pluralization variant of a work type for `count`.
///
/// 1, 21, 31... take the singular form; 2-4, 22-24... take `name_lt5`;
/// everything else, including 11-14, takes `name_gt5`.
pub fn work_type_plural(work_type: &WorkType, count: u64) -> &str {
    let last_two = count % 100;
    let last = count % 10;
    if last == 1 && last_two != 11 {
        &work_type.name_one
    } else if (2..=4).contains(&last) && !(12..=14).contains(&last_two) {
        &work_type.name_lt5
    } else {
        &work_type.name_gt5
    }
}

/// Link that opens the shift location in a maps application.
pub fn map_url(shift: &ShiftRecord) -> String {
    format!(
        "https://maps.google.com/?q={},{}",
        shift.coordinates.latitude, shift.coordinates.longitude
    )
}

/// Letter shown in place of a missing logo.
pub fn logo_initial(shift: &ShiftRecord) -> char {
    shift.company_name.chars().next().unwrap_or('C')
}

/// Call to action for the shift, `None` when no spots are left.
pub fn booking_label(shift: &ShiftRecord) -> Option<&'static str> {
    if is_fully_staffed(shift) {
        None
    } else if shift.is_promotion_enabled {
        Some("Book Special Offer")
    } else {
        Some("Book This Shift")
    }
}

/// "⭐ 4.8 (14)" for rated shifts.
pub fn rating_label(shift: &ShiftRecord) -> Option<String> {
    match shift.customer_rating {
        Some(rating) if rating > 0.0 => Some(format!(
            "⭐ {} ({})",
            rating, shift.customer_feedbacks_count
        )),
        _ => None,
    }
}

/// "$2800" style price label.
pub fn price_label(amount: f64) -> String {
    format!("${}", amount)
}
