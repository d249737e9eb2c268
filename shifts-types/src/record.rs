//! The shift posting as delivered by the server.
//!
//! Records are immutable values: the client never edits them, it only
//! replaces whole collections of them.

use serde::{Deserialize, Serialize};

use crate::ids::{Coordinates, ShiftId};

/// A category of work offered by a shift, with its pluralization variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkType {
    /// Server identifier of the work type.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Plural form used for counts of five and more.
    pub name_gt5: String,
    /// Plural form used for counts of two to four.
    pub name_lt5: String,
    /// Singular form.
    pub name_one: String,
}

/// A single job posting.
///
/// Date and time strings are pre-formatted by the server for the city of the
/// shift and are treated as opaque labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    /// Unique identifier.
    pub id: ShiftId,
    /// Where the shift takes place.
    pub coordinates: Coordinates,
    /// Street address.
    pub address: String,
    /// Employer name.
    pub company_name: String,
    /// Employer logo URI, if any.
    #[serde(default)]
    pub logo: Option<String>,
    /// Start date, formatted for the shift's city.
    pub date_start_by_city: String,
    /// Start time, formatted for the shift's city.
    pub time_start_by_city: String,
    /// End time, formatted for the shift's city.
    pub time_end_by_city: String,
    /// Workers already booked. May exceed `plan_workers`.
    pub current_workers: u32,
    /// Workers wanted.
    pub plan_workers: u32,
    /// Kinds of work offered, possibly empty.
    #[serde(default)]
    pub work_types: Vec<WorkType>,
    /// Base rate per worker.
    pub price_worker: f64,
    /// Bonus on top of the base rate.
    pub bonus_price_worker: f64,
    /// Number of customer feedbacks, as an opaque label.
    pub customer_feedbacks_count: String,
    /// Average customer rating, if rated.
    #[serde(default)]
    pub customer_rating: Option<f64>,
    /// Whether the shift is promoted.
    pub is_promotion_enabled: bool,
}
