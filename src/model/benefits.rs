use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Benefit enrollment flags for one employee entry. The flags carry no
/// cross-field rules: position-based defaults are a form-entry convenience in
/// the client, not enforced here.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": "a2f1c9de-8a57-4f4e-9d7b-0b6f4f1c2e3a",
    "employeeName": "Jane Doe",
    "employeePosition": "Nurse",
    "sss": true,
    "pagIbig": true,
    "philHealth": true,
    "leave": true,
    "thirteenthMonth": true,
    "createdAt": "2026-01-01T00:00:00Z"
}))]
pub struct Benefits {
    pub id: String,
    pub employee_name: String,
    pub employee_position: String,
    pub sss: bool,
    pub pag_ibig: bool,
    pub phil_health: bool,
    pub leave: bool,
    pub thirteenth_month: bool,

    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
}
