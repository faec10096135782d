use crate::{
    calc,
    error::ApiError,
    model::shift::{Shift, ShiftType},
};
use actix_web::{HttpResponse, web};
use chrono::Utc;
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

/// Differential rate and salary are derived from the shift type and position
/// tables; any client-sent values for them are ignored.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShiftInput {
    #[schema(example = "John Smith")]
    pub employee_name: String,

    #[schema(example = "Doctor")]
    pub employee_position: String,

    #[schema(example = "Night Shift")]
    pub shift_type: ShiftType,
}

impl ShiftInput {
    fn derive(&self) -> (f64, f64) {
        let rate = self.shift_type.differential_rate();
        let salary = calc::round_to_cents(calc::shift_salary(
            &self.employee_position,
            self.shift_type,
        ));
        (rate, salary)
    }
}

#[utoipa::path(
    get,
    path = "/shifts",
    responses((status = 200, description = "All shift records", body = Vec<Shift>)),
    tag = "Shift"
)]
pub async fn list_shifts(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let records = sqlx::query_as::<_, Shift>(
        r#"
        SELECT id, employee_name, employee_position, shift_type, differential_rate, salary, created_at
        FROM shifts
        "#,
    )
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(records))
}

#[utoipa::path(
    post,
    path = "/shifts",
    request_body = ShiftInput,
    responses(
        (status = 201, description = "Shift record created", body = Shift),
        (status = 400, description = "Missing or malformed field")
    ),
    tag = "Shift"
)]
pub async fn create_shift(
    pool: web::Data<SqlitePool>,
    payload: web::Json<ShiftInput>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    let (differential_rate, salary) = payload.derive();

    let record = Shift {
        id: Uuid::new_v4().to_string(),
        employee_name: payload.employee_name,
        employee_position: payload.employee_position,
        shift_type: payload.shift_type.to_string(),
        differential_rate,
        salary,
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO shifts (id, employee_name, employee_position, shift_type, differential_rate, salary, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&record.id)
    .bind(&record.employee_name)
    .bind(&record.employee_position)
    .bind(&record.shift_type)
    .bind(record.differential_rate)
    .bind(record.salary)
    .bind(record.created_at)
    .execute(pool.get_ref())
    .await?;

    info!(id = %record.id, salary = record.salary, "Shift record created");

    Ok(HttpResponse::Created().json(record))
}

#[utoipa::path(
    put,
    path = "/shifts/{id}",
    params(("id", description = "Shift record ID")),
    request_body = ShiftInput,
    responses(
        (status = 200, description = "Shift record replaced", body = Shift),
        (status = 404, description = "Shift record not found")
    ),
    tag = "Shift"
)]
pub async fn update_shift(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    payload: web::Json<ShiftInput>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let payload = payload.into_inner();
    let (differential_rate, salary) = payload.derive();

    let record = sqlx::query_as::<_, Shift>(
        r#"
        UPDATE shifts
        SET employee_name = ?, employee_position = ?, shift_type = ?, differential_rate = ?, salary = ?
        WHERE id = ?
        RETURNING id, employee_name, employee_position, shift_type, differential_rate, salary, created_at
        "#,
    )
    .bind(&payload.employee_name)
    .bind(&payload.employee_position)
    .bind(payload.shift_type.to_string())
    .bind(differential_rate)
    .bind(salary)
    .bind(&id)
    .fetch_optional(pool.get_ref())
    .await?
    .ok_or(ApiError::NotFound("Shift record"))?;

    Ok(HttpResponse::Ok().json(record))
}

#[utoipa::path(
    delete,
    path = "/shifts/{id}",
    params(("id", description = "Shift record ID")),
    responses(
        (status = 204, description = "Shift record deleted"),
        (status = 404, description = "Shift record not found")
    ),
    tag = "Shift"
)]
pub async fn delete_shift(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let affected = sqlx::query("DELETE FROM shifts WHERE id = ?")
        .bind(&id)
        .execute(pool.get_ref())
        .await?
        .rows_affected();

    if affected == 0 {
        return Err(ApiError::NotFound("Shift record"));
    }

    Ok(HttpResponse::NoContent().finish())
}
