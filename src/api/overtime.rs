use crate::{calc, error::ApiError, model::overtime::Overtime};
use actix_web::{HttpResponse, web};
use chrono::Utc;
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

/// Payload for both create and full-record replace. `totalSalary` is absent
/// on purpose: the stored value is always derived from the other fields, so a
/// stale client-side computation can never reach the store.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OvertimeInput {
    #[schema(example = "Jane Doe")]
    pub name: String,

    #[schema(example = "Nurse")]
    pub position: String,

    #[schema(example = 35000.0)]
    pub base_salary: f64,

    #[schema(example = 10.0)]
    pub overtime_hours: f64,
}

#[utoipa::path(
    get,
    path = "/overtimes",
    responses(
        (status = 200, description = "All overtime records", body = Vec<Overtime>)
    ),
    tag = "Overtime"
)]
pub async fn list_overtimes(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let records = sqlx::query_as::<_, Overtime>(
        r#"
        SELECT id, name, position, base_salary, overtime_hours, total_salary, created_at
        FROM overtimes
        "#,
    )
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(records))
}

#[utoipa::path(
    post,
    path = "/overtimes",
    request_body = OvertimeInput,
    responses(
        (status = 201, description = "Overtime record created", body = Overtime),
        (status = 400, description = "Missing or malformed field")
    ),
    tag = "Overtime"
)]
pub async fn create_overtime(
    pool: web::Data<SqlitePool>,
    payload: web::Json<OvertimeInput>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();

    let record = Overtime {
        id: Uuid::new_v4().to_string(),
        total_salary: calc::round_to_cents(calc::total_overtime_salary(
            payload.base_salary,
            payload.overtime_hours,
        )),
        name: payload.name,
        position: payload.position,
        base_salary: payload.base_salary,
        overtime_hours: payload.overtime_hours,
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO overtimes (id, name, position, base_salary, overtime_hours, total_salary, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&record.id)
    .bind(&record.name)
    .bind(&record.position)
    .bind(record.base_salary)
    .bind(record.overtime_hours)
    .bind(record.total_salary)
    .bind(record.created_at)
    .execute(pool.get_ref())
    .await?;

    info!(id = %record.id, total_salary = record.total_salary, "Overtime record created");

    Ok(HttpResponse::Created().json(record))
}

#[utoipa::path(
    put,
    path = "/overtimes/{id}",
    params(("id", description = "Overtime record ID")),
    request_body = OvertimeInput,
    responses(
        (status = 200, description = "Overtime record replaced", body = Overtime),
        (status = 404, description = "Overtime record not found")
    ),
    tag = "Overtime"
)]
pub async fn update_overtime(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    payload: web::Json<OvertimeInput>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let payload = payload.into_inner();

    let total_salary = calc::round_to_cents(calc::total_overtime_salary(
        payload.base_salary,
        payload.overtime_hours,
    ));

    // RETURNING keeps replace-and-read one statement: a racing delete can
    // only produce an empty result, never a half-applied read.
    let record = sqlx::query_as::<_, Overtime>(
        r#"
        UPDATE overtimes
        SET name = ?, position = ?, base_salary = ?, overtime_hours = ?, total_salary = ?
        WHERE id = ?
        RETURNING id, name, position, base_salary, overtime_hours, total_salary, created_at
        "#,
    )
    .bind(&payload.name)
    .bind(&payload.position)
    .bind(payload.base_salary)
    .bind(payload.overtime_hours)
    .bind(total_salary)
    .bind(&id)
    .fetch_optional(pool.get_ref())
    .await?
    .ok_or(ApiError::NotFound("Overtime record"))?;

    Ok(HttpResponse::Ok().json(record))
}

#[utoipa::path(
    delete,
    path = "/overtimes/{id}",
    params(("id", description = "Overtime record ID")),
    responses(
        (status = 204, description = "Overtime record deleted"),
        (status = 404, description = "Overtime record not found")
    ),
    tag = "Overtime"
)]
pub async fn delete_overtime(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let affected = sqlx::query("DELETE FROM overtimes WHERE id = ?")
        .bind(&id)
        .execute(pool.get_ref())
        .await?
        .rows_affected();

    if affected == 0 {
        return Err(ApiError::NotFound("Overtime record"));
    }

    Ok(HttpResponse::NoContent().finish())
}
