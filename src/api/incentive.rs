use crate::{calc, error::ApiError, model::incentive::Incentive};
use actix_web::{HttpResponse, web};
use chrono::Utc;
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IncentiveInput {
    #[schema(example = "Jane Doe")]
    pub name: String,

    #[schema(example = "Nurse")]
    pub position: String,

    #[schema(example = 35000.0)]
    pub salary: f64,

    /// Star rating, nominally 1-5. The range is not enforced.
    #[schema(example = 3)]
    pub incentives: i64,
}

#[utoipa::path(
    get,
    path = "/incentives",
    responses((status = 200, description = "All incentive records", body = Vec<Incentive>)),
    tag = "Incentive"
)]
pub async fn list_incentives(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let records = sqlx::query_as::<_, Incentive>(
        r#"
        SELECT id, name, position, salary, incentives, total_salary, created_at
        FROM incentives
        "#,
    )
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(records))
}

#[utoipa::path(
    post,
    path = "/incentives",
    request_body = IncentiveInput,
    responses(
        (status = 201, description = "Incentive record created", body = Incentive),
        (status = 400, description = "Missing or malformed field")
    ),
    tag = "Incentive"
)]
pub async fn create_incentive(
    pool: web::Data<SqlitePool>,
    payload: web::Json<IncentiveInput>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();

    let record = Incentive {
        id: Uuid::new_v4().to_string(),
        total_salary: calc::round_to_cents(calc::incentive_total_salary(
            payload.salary,
            payload.incentives,
            &payload.position,
        )),
        name: payload.name,
        position: payload.position,
        salary: payload.salary,
        incentives: payload.incentives,
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO incentives (id, name, position, salary, incentives, total_salary, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&record.id)
    .bind(&record.name)
    .bind(&record.position)
    .bind(record.salary)
    .bind(record.incentives)
    .bind(record.total_salary)
    .bind(record.created_at)
    .execute(pool.get_ref())
    .await?;

    info!(id = %record.id, total_salary = record.total_salary, "Incentive record created");

    Ok(HttpResponse::Created().json(record))
}

#[utoipa::path(
    put,
    path = "/incentives/{id}",
    params(("id", description = "Incentive record ID")),
    request_body = IncentiveInput,
    responses(
        (status = 200, description = "Incentive record replaced", body = Incentive),
        (status = 404, description = "Incentive record not found")
    ),
    tag = "Incentive"
)]
pub async fn update_incentive(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    payload: web::Json<IncentiveInput>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let payload = payload.into_inner();

    let total_salary = calc::round_to_cents(calc::incentive_total_salary(
        payload.salary,
        payload.incentives,
        &payload.position,
    ));

    let record = sqlx::query_as::<_, Incentive>(
        r#"
        UPDATE incentives
        SET name = ?, position = ?, salary = ?, incentives = ?, total_salary = ?
        WHERE id = ?
        RETURNING id, name, position, salary, incentives, total_salary, created_at
        "#,
    )
    .bind(&payload.name)
    .bind(&payload.position)
    .bind(payload.salary)
    .bind(payload.incentives)
    .bind(total_salary)
    .bind(&id)
    .fetch_optional(pool.get_ref())
    .await?
    .ok_or(ApiError::NotFound("Incentive record"))?;

    Ok(HttpResponse::Ok().json(record))
}

#[utoipa::path(
    delete,
    path = "/incentives/{id}",
    params(("id", description = "Incentive record ID")),
    responses(
        (status = 204, description = "Incentive record deleted"),
        (status = 404, description = "Incentive record not found")
    ),
    tag = "Incentive"
)]
pub async fn delete_incentive(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let affected = sqlx::query("DELETE FROM incentives WHERE id = ?")
        .bind(&id)
        .execute(pool.get_ref())
        .await?
        .rows_affected();

    if affected == 0 {
        return Err(ApiError::NotFound("Incentive record"));
    }

    Ok(HttpResponse::NoContent().finish())
}
