use crate::{
    error::ApiError,
    model::leave::{Leave, LeaveStatus, LeaveType},
};
use actix_web::{HttpResponse, web};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

/// Status defaults to Pending when the form omits it. The date range is
/// stored as given; an end date before the start date is accepted.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveInput {
    #[schema(example = "Jane Doe")]
    pub employee_name: String,

    #[schema(example = "Nurse")]
    pub employee_position: String,

    #[schema(example = "Sick Leave")]
    pub leave_type: LeaveType,

    #[schema(example = "2026-01-05", value_type = String, format = "date")]
    pub start_date: NaiveDate,

    #[schema(example = "2026-01-07", value_type = String, format = "date")]
    pub end_date: NaiveDate,

    #[serde(default)]
    #[schema(example = "Pending")]
    pub status: LeaveStatus,
}

#[utoipa::path(
    get,
    path = "/leaves",
    responses((status = 200, description = "All leave requests", body = Vec<Leave>)),
    tag = "Leave"
)]
pub async fn list_leaves(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let records = sqlx::query_as::<_, Leave>(
        r#"
        SELECT id, employee_name, employee_position, leave_type, start_date, end_date, status, created_at
        FROM leaves
        "#,
    )
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(records))
}

#[utoipa::path(
    get,
    path = "/leaves/{id}",
    params(("id", description = "Leave request ID")),
    responses(
        (status = 200, description = "Leave request found", body = Leave),
        (status = 404, description = "Leave request not found")
    ),
    tag = "Leave"
)]
pub async fn get_leave(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let record = sqlx::query_as::<_, Leave>(
        r#"
        SELECT id, employee_name, employee_position, leave_type, start_date, end_date, status, created_at
        FROM leaves
        WHERE id = ?
        "#,
    )
    .bind(&id)
    .fetch_optional(pool.get_ref())
    .await?
    .ok_or(ApiError::NotFound("Leave request"))?;

    Ok(HttpResponse::Ok().json(record))
}

#[utoipa::path(
    post,
    path = "/leaves",
    request_body = LeaveInput,
    responses(
        (status = 201, description = "Leave request created", body = Leave),
        (status = 400, description = "Missing or malformed field")
    ),
    tag = "Leave"
)]
pub async fn create_leave(
    pool: web::Data<SqlitePool>,
    payload: web::Json<LeaveInput>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();

    let record = Leave {
        id: Uuid::new_v4().to_string(),
        employee_name: payload.employee_name,
        employee_position: payload.employee_position,
        leave_type: payload.leave_type.to_string(),
        start_date: payload.start_date,
        end_date: payload.end_date,
        status: payload.status.to_string(),
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO leaves
        (id, employee_name, employee_position, leave_type, start_date, end_date, status, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&record.id)
    .bind(&record.employee_name)
    .bind(&record.employee_position)
    .bind(&record.leave_type)
    .bind(record.start_date)
    .bind(record.end_date)
    .bind(&record.status)
    .bind(record.created_at)
    .execute(pool.get_ref())
    .await?;

    info!(id = %record.id, leave_type = %record.leave_type, "Leave request created");

    Ok(HttpResponse::Created().json(record))
}

#[utoipa::path(
    put,
    path = "/leaves/{id}",
    params(("id", description = "Leave request ID")),
    request_body = LeaveInput,
    responses(
        (status = 200, description = "Leave request replaced", body = Leave),
        (status = 404, description = "Leave request not found")
    ),
    tag = "Leave"
)]
pub async fn update_leave(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    payload: web::Json<LeaveInput>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let payload = payload.into_inner();

    let record = sqlx::query_as::<_, Leave>(
        r#"
        UPDATE leaves
        SET employee_name = ?, employee_position = ?, leave_type = ?, start_date = ?,
            end_date = ?, status = ?
        WHERE id = ?
        RETURNING id, employee_name, employee_position, leave_type, start_date, end_date, status, created_at
        "#,
    )
    .bind(&payload.employee_name)
    .bind(&payload.employee_position)
    .bind(payload.leave_type.to_string())
    .bind(payload.start_date)
    .bind(payload.end_date)
    .bind(payload.status.to_string())
    .bind(&id)
    .fetch_optional(pool.get_ref())
    .await?
    .ok_or(ApiError::NotFound("Leave request"))?;

    Ok(HttpResponse::Ok().json(record))
}

#[utoipa::path(
    delete,
    path = "/leaves/{id}",
    params(("id", description = "Leave request ID")),
    responses(
        (status = 204, description = "Leave request deleted"),
        (status = 404, description = "Leave request not found")
    ),
    tag = "Leave"
)]
pub async fn delete_leave(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let affected = sqlx::query("DELETE FROM leaves WHERE id = ?")
        .bind(&id)
        .execute(pool.get_ref())
        .await?
        .rows_affected();

    if affected == 0 {
        return Err(ApiError::NotFound("Leave request"));
    }

    Ok(HttpResponse::NoContent().finish())
}
