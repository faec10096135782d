use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};
use utoipa::ToSchema;

/// Shift categories with their fixed differential percentage. The serialized
/// names match the strings already stored in legacy records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, ToSchema)]
pub enum ShiftType {
    #[serde(rename = "Regular Shift")]
    #[strum(serialize = "Regular Shift")]
    Regular,

    #[serde(rename = "Night Shift")]
    #[strum(serialize = "Night Shift")]
    Night,

    #[serde(rename = "Weekend Shift")]
    #[strum(serialize = "Weekend Shift")]
    Weekend,

    #[serde(rename = "Holiday Shift")]
    #[strum(serialize = "Holiday Shift")]
    Holiday,
}

impl ShiftType {
    /// Percentage uplift over the position's base daily rate.
    pub fn differential_rate(&self) -> f64 {
        match self {
            ShiftType::Regular => 0.0,
            ShiftType::Night => 5.0,
            ShiftType::Weekend => 10.0,
            ShiftType::Holiday => 15.0,
        }
    }
}

/// One shift assignment. Both `differential_rate` and `salary` are derived
/// from the shift type and position tables when the record is written.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": "a2f1c9de-8a57-4f4e-9d7b-0b6f4f1c2e3a",
    "employeeName": "John Smith",
    "employeePosition": "Doctor",
    "shiftType": "Night Shift",
    "differentialRate": 5.0,
    "salary": 3341.10,
    "createdAt": "2026-01-01T00:00:00Z"
}))]
pub struct Shift {
    pub id: String,
    pub employee_name: String,
    pub employee_position: String,
    pub shift_type: String,
    pub differential_rate: f64,
    pub salary: f64,

    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
}
