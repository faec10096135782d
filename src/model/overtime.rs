use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One overtime submission. `total_salary` is derived server-side from the
/// base salary and overtime hours; the client-sent figure is never trusted.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": "a2f1c9de-8a57-4f4e-9d7b-0b6f4f1c2e3a",
    "name": "Jane Doe",
    "position": "Nurse",
    "baseSalary": 35000.0,
    "overtimeHours": 10.0,
    "totalSalary": 36988.64,
    "createdAt": "2026-01-01T00:00:00Z"
}))]
pub struct Overtime {
    pub id: String,
    pub name: String,
    pub position: String,
    pub base_salary: f64,
    pub overtime_hours: f64,
    pub total_salary: f64,

    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
}
