use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;

/// Leave categories offered by the admin form. Serialized names match the
/// strings in legacy records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
pub enum LeaveType {
    #[serde(rename = "Sick Leave")]
    #[strum(serialize = "Sick Leave")]
    Sick,

    #[serde(rename = "Vacation Leave")]
    #[strum(serialize = "Vacation Leave")]
    Vacation,

    #[serde(rename = "Maternity Leave")]
    #[strum(serialize = "Maternity Leave")]
    Maternity,

    #[serde(rename = "Paternity Leave")]
    #[strum(serialize = "Paternity Leave")]
    Paternity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, Default, ToSchema)]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// One leave request. There is no check that `start_date <= end_date`; the
/// legacy store accepts inverted ranges and so does this one.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": "a2f1c9de-8a57-4f4e-9d7b-0b6f4f1c2e3a",
    "employeeName": "Jane Doe",
    "employeePosition": "Nurse",
    "leaveType": "Sick Leave",
    "startDate": "2026-01-05",
    "endDate": "2026-01-07",
    "status": "Pending",
    "createdAt": "2026-01-01T00:00:00Z"
}))]
pub struct Leave {
    pub id: String,
    pub employee_name: String,
    pub employee_position: String,
    pub leave_type: String,

    #[schema(value_type = String, format = "date")]
    pub start_date: NaiveDate,

    #[schema(value_type = String, format = "date")]
    pub end_date: NaiveDate,

    pub status: String,

    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
}
