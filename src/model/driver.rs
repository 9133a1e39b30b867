//! Driver performance record

use serde::{Deserialize, Serialize};

/// Snapshot of a driver's performance document.
///
/// Field names match the stored document. Numeric fields carry no enforced
/// range: percentages are 0-100 and ratios 0.0-1.0 by convention only.
/// Fields missing from the document take their default value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverRecord {
    pub civil_id: String,
    pub driver_id: String,
    pub driver_name: String,
    pub org_id: String,
    pub org_name: String,
    pub rank: String,
    pub fleet_type: String,

    pub acceptance_percentage: f64,
    pub avg_rating: f64,
    pub days_worked: f64,
    pub delivered: f64,
    /// On-time ratio
    pub on_time: f64,
    pub on_time_orders: f64,
    /// Overall percentage
    pub percentage: f64,
    pub rejected: f64,
    pub timeout: f64,
    pub utr_daily: f64,
}
