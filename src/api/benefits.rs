use crate::{error::ApiError, model::benefits::Benefits};
use actix_web::{HttpResponse, web};
use chrono::Utc;
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

/// Flags omitted from the payload default to false, matching the store-level
/// defaults of the legacy schema.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BenefitsInput {
    #[schema(example = "Jane Doe")]
    pub employee_name: String,

    #[schema(example = "Nurse")]
    pub employee_position: String,

    #[serde(default)]
    #[schema(example = true)]
    pub sss: bool,

    #[serde(default)]
    #[schema(example = true)]
    pub pag_ibig: bool,

    #[serde(default)]
    #[schema(example = true)]
    pub phil_health: bool,

    #[serde(default)]
    #[schema(example = true)]
    pub leave: bool,

    #[serde(default)]
    #[schema(example = true)]
    pub thirteenth_month: bool,
}

#[utoipa::path(
    get,
    path = "/benefits",
    responses((status = 200, description = "All benefit entries", body = Vec<Benefits>)),
    tag = "Benefits"
)]
pub async fn list_benefits(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let records = sqlx::query_as::<_, Benefits>(
        r#"
        SELECT id, employee_name, employee_position, sss, pag_ibig, phil_health, leave,
               thirteenth_month, created_at
        FROM benefits
        "#,
    )
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(records))
}

#[utoipa::path(
    post,
    path = "/benefits",
    request_body = BenefitsInput,
    responses(
        (status = 201, description = "Benefit entry created", body = Benefits),
        (status = 400, description = "Missing or malformed field")
    ),
    tag = "Benefits"
)]
pub async fn create_benefits(
    pool: web::Data<SqlitePool>,
    payload: web::Json<BenefitsInput>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();

    let record = Benefits {
        id: Uuid::new_v4().to_string(),
        employee_name: payload.employee_name,
        employee_position: payload.employee_position,
        sss: payload.sss,
        pag_ibig: payload.pag_ibig,
        phil_health: payload.phil_health,
        leave: payload.leave,
        thirteenth_month: payload.thirteenth_month,
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO benefits
        (id, employee_name, employee_position, sss, pag_ibig, phil_health, leave, thirteenth_month, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&record.id)
    .bind(&record.employee_name)
    .bind(&record.employee_position)
    .bind(record.sss)
    .bind(record.pag_ibig)
    .bind(record.phil_health)
    .bind(record.leave)
    .bind(record.thirteenth_month)
    .bind(record.created_at)
    .execute(pool.get_ref())
    .await?;

    info!(id = %record.id, "Benefit entry created");

    Ok(HttpResponse::Created().json(record))
}

#[utoipa::path(
    put,
    path = "/benefits/{id}",
    params(("id", description = "Benefit entry ID")),
    request_body = BenefitsInput,
    responses(
        (status = 200, description = "Benefit entry replaced", body = Benefits),
        (status = 404, description = "Benefit entry not found")
    ),
    tag = "Benefits"
)]
pub async fn update_benefits(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    payload: web::Json<BenefitsInput>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let payload = payload.into_inner();

    let record = sqlx::query_as::<_, Benefits>(
        r#"
        UPDATE benefits
        SET employee_name = ?, employee_position = ?, sss = ?, pag_ibig = ?, phil_health = ?,
            leave = ?, thirteenth_month = ?
        WHERE id = ?
        RETURNING id, employee_name, employee_position, sss, pag_ibig, phil_health, leave,
                  thirteenth_month, created_at
        "#,
    )
    .bind(&payload.employee_name)
    .bind(&payload.employee_position)
    .bind(payload.sss)
    .bind(payload.pag_ibig)
    .bind(payload.phil_health)
    .bind(payload.leave)
    .bind(payload.thirteenth_month)
    .bind(&id)
    .fetch_optional(pool.get_ref())
    .await?
    .ok_or(ApiError::NotFound("Benefit entry"))?;

    Ok(HttpResponse::Ok().json(record))
}

#[utoipa::path(
    delete,
    path = "/benefits/{id}",
    params(("id", description = "Benefit entry ID")),
    responses(
        (status = 204, description = "Benefit entry deleted"),
        (status = 404, description = "Benefit entry not found")
    ),
    tag = "Benefits"
)]
pub async fn delete_benefits(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let affected = sqlx::query("DELETE FROM benefits WHERE id = ?")
        .bind(&id)
        .execute(pool.get_ref())
        .await?
        .rows_affected();

    if affected == 0 {
        return Err(ApiError::NotFound("Benefit entry"));
    }

    Ok(HttpResponse::NoContent().finish())
}
