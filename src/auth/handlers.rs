use crate::{
    auth::{
        jwt::generate_token,
        password::{check_password_strength, hash_password, verify_password},
    },
    config::Config,
    error::ApiError,
    model::credential::Credential,
    models::{LoginReqDto, LoginResponse, RegisterReq},
};
use actix_web::{HttpMessage, HttpRequest, HttpResponse, web};
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

/// Cheap shape check, not RFC-grade parsing. Anything with a user part, one
/// `@` and a dotted domain passes.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(user), Some(domain), None) => {
            !user.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

async fn email_taken(email: &str, pool: &SqlitePool) -> Result<bool, ApiError> {
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM credentials WHERE email = ? LIMIT 1)",
    )
    .bind(email)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

/// Credential registration handler.
#[instrument(name = "auth_register", skip(payload, pool), fields(email = %payload.email))]
pub async fn register(
    payload: web::Json<RegisterReq>,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let name = payload.name.trim();
    let email = payload.email.trim().to_lowercase();

    if name.is_empty() || email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::Validation(
            "Name, email and password must not be empty".to_string(),
        ));
    }

    if !is_valid_email(&email) {
        return Err(ApiError::Validation("Invalid email format".to_string()));
    }

    check_password_strength(&payload.password)
        .map_err(|msg| ApiError::Validation(msg.to_string()))?;

    if email_taken(&email, pool.get_ref()).await? {
        info!("Registration rejected: email already in use");
        return Err(ApiError::Duplicate("Email already in use".to_string()));
    }

    let credential = Credential {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        email,
        password: hash_password(&payload.password),
        created_at: Utc::now(),
        last_login_at: None,
    };

    // The unique index still backstops the availability check above; a racing
    // duplicate insert surfaces as DuplicateError through the error mapping.
    sqlx::query(
        r#"
        INSERT INTO credentials (id, name, email, password, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&credential.id)
    .bind(&credential.name)
    .bind(&credential.email)
    .bind(&credential.password)
    .bind(credential.created_at)
    .execute(pool.get_ref())
    .await?;

    info!(credential_id = %credential.id, "Credential registered");

    Ok(HttpResponse::Created().json(credential))
}

/// Login handler: verifies the password and issues a bearer token.
#[instrument(name = "auth_login", skip(payload, pool, config), fields(email = %payload.email))]
pub async fn login(
    payload: web::Json<LoginReqDto>,
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
) -> Result<HttpResponse, ApiError> {
    if payload.email.trim().is_empty() || payload.password.is_empty() {
        return Err(ApiError::Validation(
            "Email and password required".to_string(),
        ));
    }

    debug!("Fetching credential");

    let credential = sqlx::query_as::<_, Credential>(
        r#"
        SELECT id, name, email, password, created_at, last_login_at
        FROM credentials
        WHERE email = ?
        "#,
    )
    .bind(payload.email.trim().to_lowercase())
    .fetch_optional(pool.get_ref())
    .await?
    .ok_or_else(|| {
        info!("Invalid credentials: email not registered");
        ApiError::Auth("Invalid credentials".to_string())
    })?;

    if verify_password(&payload.password, &credential.password).is_err() {
        info!("Invalid credentials: password mismatch");
        return Err(ApiError::Auth("Invalid credentials".to_string()));
    }

    let token = generate_token(
        &credential.id,
        &credential.email,
        &config.jwt_secret,
        config.token_ttl,
    );

    // Non-fatal bookkeeping; a failed timestamp must not fail the login.
    if let Err(e) = sqlx::query("UPDATE credentials SET last_login_at = ? WHERE id = ?")
        .bind(Utc::now())
        .bind(&credential.id)
        .execute(pool.get_ref())
        .await
    {
        error!(error = %e, "Failed to update last_login_at");
    }

    info!("Login successful");

    Ok(HttpResponse::Ok().json(LoginResponse {
        message: "Success".to_string(),
        token,
    }))
}

/// Probe route behind the bearer-token middleware.
pub async fn protected(req: HttpRequest) -> HttpResponse {
    match req.extensions().get::<crate::models::Claims>() {
        Some(claims) => HttpResponse::Ok().json(serde_json::json!({
            "message": "This is a protected route",
            "email": claims.email,
        })),
        None => HttpResponse::Forbidden().finish(),
    }
}
