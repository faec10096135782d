use actix_web::{App, test, web::Data};
use hospital_hrm::{config::Config, db, routes};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test-secret".to_string(),
        server_addr: "127.0.0.1:0".to_string(),
        token_ttl: 3600,
        rate_login_per_min: 600,
        rate_register_per_min: 600,
    }
}

// A single connection keeps every query on the same in-memory database.
async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    db::init_schema(&pool).await.unwrap();
    pool
}

macro_rules! test_app {
    ($pool:expr) => {{
        let config = test_config();
        let route_config = config.clone();
        test::init_service(
            App::new()
                .app_data(Data::new($pool.clone()))
                .app_data(Data::new(config))
                .configure(move |cfg| routes::configure(cfg, route_config.clone())),
        )
        .await
    }};
}

fn peer() -> std::net::SocketAddr {
    "127.0.0.1:8055".parse().unwrap()
}

// ---------- Overtime ----------

#[actix_web::test]
async fn overtime_create_then_list_round_trip() {
    let pool = test_pool().await;
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/overtimes")
        .set_json(json!({
            "name": "Jane Doe",
            "position": "Nurse",
            "baseSalary": 35000.0,
            "overtimeHours": 10.0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let created: Value = test::read_body_json(resp).await;
    assert!(!created["id"].as_str().unwrap().is_empty());
    // 35000 + 10 * (35000 / 264) * 1.5, rounded to cents
    assert_eq!(created["totalSalary"].as_f64().unwrap(), 36988.64);

    let req = test::TestRequest::get().uri("/overtimes").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], created["id"]);
    assert_eq!(listed[0]["name"], "Jane Doe");
    assert_eq!(listed[0]["position"], "Nurse");
    assert_eq!(listed[0]["baseSalary"].as_f64().unwrap(), 35000.0);
    assert_eq!(listed[0]["overtimeHours"].as_f64().unwrap(), 10.0);
    assert_eq!(listed[0]["totalSalary"], created["totalSalary"]);
}

#[actix_web::test]
async fn overtime_update_is_idempotent() {
    let pool = test_pool().await;
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/overtimes")
        .set_json(json!({
            "name": "Jane Doe",
            "position": "Nurse",
            "baseSalary": 35000.0,
            "overtimeHours": 10.0
        }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_str().unwrap().to_string();

    let replacement = json!({
        "name": "Jane Q. Doe",
        "position": "Doctor",
        "baseSalary": 70000.0,
        "overtimeHours": 4.0
    });

    let req = test::TestRequest::put()
        .uri(&format!("/overtimes/{id}"))
        .set_json(&replacement)
        .to_request();
    let first: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::put()
        .uri(&format!("/overtimes/{id}"))
        .set_json(&replacement)
        .to_request();
    let second: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(first, second);
    assert_eq!(second["name"], "Jane Q. Doe");
    assert_eq!(
        second["totalSalary"].as_f64().unwrap(),
        (100.0_f64 * (70000.0 + 4.0 * (70000.0 / 264.0) * 1.5)).round() / 100.0
    );
}

#[actix_web::test]
async fn overtime_delete_then_update_fails() {
    let pool = test_pool().await;
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/overtimes")
        .set_json(json!({
            "name": "Jane Doe",
            "position": "Nurse",
            "baseSalary": 35000.0,
            "overtimeHours": 0.0
        }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_str().unwrap().to_string();
    // h = 0 leaves the base salary untouched
    assert_eq!(created["totalSalary"].as_f64().unwrap(), 35000.0);

    let req = test::TestRequest::delete()
        .uri(&format!("/overtimes/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);

    let req = test::TestRequest::put()
        .uri(&format!("/overtimes/{id}"))
        .set_json(json!({
            "name": "Jane Doe",
            "position": "Nurse",
            "baseSalary": 35000.0,
            "overtimeHours": 2.0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let req = test::TestRequest::delete()
        .uri(&format!("/overtimes/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn overtime_missing_required_field_rejected() {
    let pool = test_pool().await;
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/overtimes")
        .set_json(json!({
            "name": "Jane Doe",
            "position": "Nurse"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

/// Negative overtime hours are not rejected; they just shrink the total.
/// Documented gap, pinned.
#[actix_web::test]
async fn overtime_negative_hours_accepted_and_reduce_total() {
    let pool = test_pool().await;
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/overtimes")
        .set_json(json!({
            "name": "Jane Doe",
            "position": "Nurse",
            "baseSalary": 35000.0,
            "overtimeHours": -10.0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let created: Value = test::read_body_json(resp).await;
    // 35000 - 10 * (35000 / 264) * 1.5, rounded to cents
    assert_eq!(created["totalSalary"].as_f64().unwrap(), 33011.36);
    assert!(created["totalSalary"].as_f64().unwrap() < 35000.0);
}

/// Same-id concurrent writers are last-write-wins with no version check.
/// This is an accepted property of the design, not a defect; the test pins it.
#[actix_web::test]
async fn overtime_same_id_update_is_last_write_wins() {
    let pool = test_pool().await;
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/overtimes")
        .set_json(json!({
            "name": "Jane Doe",
            "position": "Nurse",
            "baseSalary": 35000.0,
            "overtimeHours": 10.0
        }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_str().unwrap().to_string();

    for hours in [5.0, 8.0] {
        let req = test::TestRequest::put()
            .uri(&format!("/overtimes/{id}"))
            .set_json(json!({
                "name": "Jane Doe",
                "position": "Nurse",
                "baseSalary": 35000.0,
                "overtimeHours": hours
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    let req = test::TestRequest::get().uri("/overtimes").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed[0]["overtimeHours"].as_f64().unwrap(), 8.0);
}

/// Replacing a vanished id must surface as 404 from every resource, never as
/// a store error, even when the row disappears between request and write.
#[actix_web::test]
async fn update_missing_id_is_not_found_for_every_resource() {
    let pool = test_pool().await;
    let app = test_app!(pool);

    let cases = [
        (
            "/overtimes/gone",
            json!({
                "name": "Jane Doe",
                "position": "Nurse",
                "baseSalary": 35000.0,
                "overtimeHours": 1.0
            }),
        ),
        (
            "/shifts/gone",
            json!({
                "employeeName": "Jane Doe",
                "employeePosition": "Nurse",
                "shiftType": "Regular Shift"
            }),
        ),
        (
            "/incentives/gone",
            json!({
                "name": "Jane Doe",
                "position": "Nurse",
                "salary": 35000.0,
                "incentives": 1
            }),
        ),
        (
            "/benefits/gone",
            json!({
                "employeeName": "Jane Doe",
                "employeePosition": "Nurse"
            }),
        ),
        (
            "/leaves/gone",
            json!({
                "employeeName": "Jane Doe",
                "employeePosition": "Nurse",
                "leaveType": "Sick Leave",
                "startDate": "2026-01-05",
                "endDate": "2026-01-07"
            }),
        ),
    ];

    for (uri, payload) in cases {
        let req = test::TestRequest::put().uri(uri).set_json(payload).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404, "{uri} should be a 404");
    }
}

// ---------- Shift ----------

#[actix_web::test]
async fn shift_create_derives_salary_from_tables() {
    let pool = test_pool().await;
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/shifts")
        .set_json(json!({
            "employeeName": "John Smith",
            "employeePosition": "Doctor",
            "shiftType": "Night Shift"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["shiftType"], "Night Shift");
    assert_eq!(created["differentialRate"].as_f64().unwrap(), 5.0);
    // 3182 * 1.05
    assert_eq!(created["salary"].as_f64().unwrap(), 3341.10);
}

#[actix_web::test]
async fn shift_unknown_position_yields_zero_salary() {
    let pool = test_pool().await;
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/shifts")
        .set_json(json!({
            "employeeName": "Pat Cruz",
            "employeePosition": "Janitor",
            "shiftType": "Holiday Shift"
        }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;

    // Unguarded lookup: unknown positions get base 0, documented behavior.
    assert_eq!(created["salary"].as_f64().unwrap(), 0.0);
    assert_eq!(created["differentialRate"].as_f64().unwrap(), 15.0);
}

#[actix_web::test]
async fn shift_unknown_shift_type_rejected() {
    let pool = test_pool().await;
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/shifts")
        .set_json(json!({
            "employeeName": "Pat Cruz",
            "employeePosition": "Nurse",
            "shiftType": "Graveyard Shift"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

// ---------- Incentive ----------

#[actix_web::test]
async fn incentive_create_uses_canonical_formula() {
    let pool = test_pool().await;
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/incentives")
        .set_json(json!({
            "name": "Jane Doe",
            "position": "Nurse",
            "salary": 35000.0,
            "incentives": 3
        }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;

    // 35000 + 3 * 1000 * 1.3
    assert_eq!(created["totalSalary"].as_f64().unwrap(), 38900.0);
    assert_eq!(created["incentives"].as_i64().unwrap(), 3);
}

/// The 1-5 star range is nominal only; out-of-range ratings go straight
/// through the formula. Documented gap, pinned.
#[actix_web::test]
async fn incentive_rating_outside_star_range_accepted() {
    let pool = test_pool().await;
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/incentives")
        .set_json(json!({
            "name": "Jane Doe",
            "position": "Nurse",
            "salary": 35000.0,
            "incentives": 50
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let created: Value = test::read_body_json(resp).await;
    // 35000 + 50 * 1000 * 1.3
    assert_eq!(created["incentives"].as_i64().unwrap(), 50);
    assert_eq!(created["totalSalary"].as_f64().unwrap(), 100000.0);
}

#[actix_web::test]
async fn incentive_update_recomputes_total() {
    let pool = test_pool().await;
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/incentives")
        .set_json(json!({
            "name": "Jane Doe",
            "position": "Nurse",
            "salary": 35000.0,
            "incentives": 3
        }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/incentives/{id}"))
        .set_json(json!({
            "name": "Jane Doe",
            "position": "Doctor",
            "salary": 70000.0,
            "incentives": 5
        }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;

    // 70000 + 5 * 1000 * 1.5
    assert_eq!(updated["totalSalary"].as_f64().unwrap(), 77500.0);
}

// ---------- Benefits ----------

#[actix_web::test]
async fn benefits_flags_default_to_false() {
    let pool = test_pool().await;
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/benefits")
        .set_json(json!({
            "employeeName": "Jane Doe",
            "employeePosition": "Nurse"
        }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;

    for flag in ["sss", "pagIbig", "philHealth", "leave", "thirteenthMonth"] {
        assert_eq!(created[flag], false, "{flag} should default to false");
    }
}

#[actix_web::test]
async fn benefits_full_replace_round_trip() {
    let pool = test_pool().await;
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/benefits")
        .set_json(json!({
            "employeeName": "Jane Doe",
            "employeePosition": "Nurse",
            "sss": true,
            "pagIbig": true,
            "philHealth": true,
            "leave": true,
            "thirteenthMonth": true
        }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["sss"], true);

    // Full replace: an omitted flag falls back to false, not its old value.
    let req = test::TestRequest::put()
        .uri(&format!("/benefits/{id}"))
        .set_json(json!({
            "employeeName": "Jane Doe",
            "employeePosition": "Nurse",
            "sss": true
        }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["sss"], true);
    assert_eq!(updated["pagIbig"], false);
    assert_eq!(updated["thirteenthMonth"], false);
}

// ---------- Leave ----------

#[actix_web::test]
async fn leave_defaults_to_pending_and_is_fetchable_by_id() {
    let pool = test_pool().await;
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/leaves")
        .set_json(json!({
            "employeeName": "Jane Doe",
            "employeePosition": "Nurse",
            "leaveType": "Sick Leave",
            "startDate": "2026-01-05",
            "endDate": "2026-01-07"
        }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created["status"], "Pending");
    let id = created["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/leaves/{id}"))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["leaveType"], "Sick Leave");
    assert_eq!(fetched["startDate"], "2026-01-05");
    assert_eq!(fetched["endDate"], "2026-01-07");

    let req = test::TestRequest::get()
        .uri("/leaves/no-such-id")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

/// The store does not require startDate <= endDate. Documented gap, pinned.
#[actix_web::test]
async fn leave_accepts_inverted_date_range() {
    let pool = test_pool().await;
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/leaves")
        .set_json(json!({
            "employeeName": "Jane Doe",
            "employeePosition": "Nurse",
            "leaveType": "Vacation Leave",
            "startDate": "2026-02-10",
            "endDate": "2026-02-01",
            "status": "Approved"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["status"], "Approved");
    assert_eq!(created["startDate"], "2026-02-10");
    assert_eq!(created["endDate"], "2026-02-01");
}

#[actix_web::test]
async fn leave_unknown_type_rejected() {
    let pool = test_pool().await;
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/leaves")
        .set_json(json!({
            "employeeName": "Jane Doe",
            "employeePosition": "Nurse",
            "leaveType": "Sabbatical",
            "startDate": "2026-01-05",
            "endDate": "2026-01-07"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

// ---------- Session gate ----------

/// A zero request-per-minute setting floors to the tightest valid limiter
/// instead of aborting route construction.
#[actix_web::test]
async fn zero_rate_limit_config_still_serves() {
    let pool = test_pool().await;
    let mut config = test_config();
    config.rate_login_per_min = 0;
    config.rate_register_per_min = 0;
    let route_config = config.clone();
    let app = test::init_service(
        App::new()
            .app_data(Data::new(pool.clone()))
            .app_data(Data::new(config))
            .configure(move |cfg| routes::configure(cfg, route_config.clone())),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/register")
        .peer_addr(peer())
        .set_json(json!({
            "name": "Jane Doe",
            "email": "jane.doe@hospital.com",
            "password": "Str0ng!Pass"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
}

#[actix_web::test]
async fn register_duplicate_email_rejected() {
    let pool = test_pool().await;
    let app = test_app!(pool);

    let payload = json!({
        "name": "Jane Doe",
        "email": "jane.doe@hospital.com",
        "password": "Str0ng!Pass"
    });

    let req = test::TestRequest::post()
        .uri("/register")
        .peer_addr(peer())
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["email"], "jane.doe@hospital.com");
    // The hash must never be serialized outward.
    assert!(created.get("password").is_none());

    let req = test::TestRequest::post()
        .uri("/register")
        .peer_addr(peer())
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn register_rejects_weak_password_and_bad_email() {
    let pool = test_pool().await;
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/register")
        .peer_addr(peer())
        .set_json(json!({
            "name": "Jane Doe",
            "email": "jane.doe@hospital.com",
            "password": "weak"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::post()
        .uri("/register")
        .peer_addr(peer())
        .set_json(json!({
            "name": "Jane Doe",
            "email": "not-an-email",
            "password": "Str0ng!Pass"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn login_issues_token_accepted_by_protected_route() {
    let pool = test_pool().await;
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/register")
        .peer_addr(peer())
        .set_json(json!({
            "name": "Jane Doe",
            "email": "jane.doe@hospital.com",
            "password": "Str0ng!Pass"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    // Wrong password is a 401
    let req = test::TestRequest::post()
        .uri("/login")
        .peer_addr(peer())
        .set_json(json!({
            "email": "jane.doe@hospital.com",
            "password": "Wrong!Pass1"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let req = test::TestRequest::post()
        .uri("/login")
        .peer_addr(peer())
        .set_json(json!({
            "email": "jane.doe@hospital.com",
            "password": "Str0ng!Pass"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Success");
    let token = body["token"].as_str().unwrap().to_string();

    // Missing token is a 403, invalid token is a 403, valid token passes.
    let req = test::TestRequest::get().uri("/protected").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header(("Authorization", "Bearer not-a-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}
