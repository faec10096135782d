use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One incentive award. `incentives` is the 1-5 star rating; range is not
/// enforced, matching the legacy store. `total_salary` is derived server-side.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": "a2f1c9de-8a57-4f4e-9d7b-0b6f4f1c2e3a",
    "name": "Jane Doe",
    "position": "Nurse",
    "salary": 35000.0,
    "incentives": 3,
    "totalSalary": 38900.0,
    "createdAt": "2026-01-01T00:00:00Z"
}))]
pub struct Incentive {
    pub id: String,
    pub name: String,
    pub position: String,
    pub salary: f64,
    pub incentives: i64,
    pub total_salary: f64,

    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
}
