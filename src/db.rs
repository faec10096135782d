use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// One table per record collection. No foreign keys: the collections are
/// independent per-submission entries, related only by free-text names.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS credentials (
        id            TEXT PRIMARY KEY,
        name          TEXT NOT NULL,
        email         TEXT NOT NULL UNIQUE,
        password      TEXT NOT NULL,
        created_at    TEXT NOT NULL,
        last_login_at TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS overtimes (
        id             TEXT PRIMARY KEY,
        name           TEXT NOT NULL,
        position       TEXT NOT NULL,
        base_salary    REAL NOT NULL,
        overtime_hours REAL NOT NULL,
        total_salary   REAL NOT NULL,
        created_at     TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS shifts (
        id                TEXT PRIMARY KEY,
        employee_name     TEXT NOT NULL,
        employee_position TEXT NOT NULL,
        shift_type        TEXT NOT NULL,
        differential_rate REAL NOT NULL,
        salary            REAL NOT NULL,
        created_at        TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS incentives (
        id           TEXT PRIMARY KEY,
        name         TEXT NOT NULL,
        position     TEXT NOT NULL,
        salary       REAL NOT NULL,
        incentives   INTEGER NOT NULL,
        total_salary REAL NOT NULL,
        created_at   TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS benefits (
        id                TEXT PRIMARY KEY,
        employee_name     TEXT NOT NULL,
        employee_position TEXT NOT NULL,
        sss               INTEGER NOT NULL DEFAULT 0,
        pag_ibig          INTEGER NOT NULL DEFAULT 0,
        phil_health       INTEGER NOT NULL DEFAULT 0,
        leave             INTEGER NOT NULL DEFAULT 0,
        thirteenth_month  INTEGER NOT NULL DEFAULT 0,
        created_at        TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS leaves (
        id                TEXT PRIMARY KEY,
        employee_name     TEXT NOT NULL,
        employee_position TEXT NOT NULL,
        leave_type        TEXT NOT NULL,
        start_date        TEXT NOT NULL,
        end_date          TEXT NOT NULL,
        status            TEXT NOT NULL DEFAULT 'Pending',
        created_at        TEXT NOT NULL
    )
    "#,
];

pub async fn init_db(database_url: &str) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .context("Invalid DATABASE_URL")?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    init_schema(&pool).await?;

    Ok(pool)
}

pub async fn init_schema(pool: &SqlitePool) -> anyhow::Result<()> {
    for ddl in SCHEMA {
        sqlx::query(ddl)
            .execute(pool)
            .await
            .context("Failed to create table")?;
    }
    Ok(())
}
