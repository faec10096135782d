use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Login credential for the admin UI. The password hash stays internal: it is
/// deserialized from the store but never serialized outward.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    #[schema(example = "a2f1c9de-8a57-4f4e-9d7b-0b6f4f1c2e3a")]
    pub id: String,

    #[schema(example = "Jane Doe")]
    pub name: String,

    #[schema(example = "jane.doe@hospital.com")]
    pub email: String,

    #[serde(skip_serializing)]
    #[schema(value_type = String, write_only)]
    pub password: String,

    #[schema(example = "2026-01-01T00:00:00Z", value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,

    #[schema(example = "2026-01-01T00:00:00Z", value_type = String, format = "date-time", nullable = true)]
    pub last_login_at: Option<DateTime<Utc>>,
}
