//! HTTP surface tests, exercising the router with in-memory state

use attend_server::db::{MIGRATOR, capabilities};
use attend_server::{Config, ServerState, api};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

async fn test_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory database");
    MIGRATOR.run(&pool).await.expect("run migrations");
    let caps = capabilities::probe(&pool).await.expect("probe schema");

    let config = Config::with_overrides(":memory:", 0);
    api::router(ServerState::new(config, pool, caps))
}

async fn request(app: &Router, method: &str, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(path);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("build request");

    let response = app.clone().oneshot(request).await.expect("send request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("parse body")
    };
    (status, value)
}

#[tokio::test]
async fn health_reports_healthy() {
    let app = test_app().await;

    let (status, body) = request(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = request(&app, "GET", "/health/detailed", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert_eq!(body["capabilities"]["emp_api_username"], true);
}

#[tokio::test]
async fn employee_create_reports_sync_outcome() {
    let app = test_app().await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/employees",
        Some(json!({
            "employee_no": "E1",
            "employee_name": "Alice",
            "erp_username": "erp1",
            "api_username": "100"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["employee"]["employee_no"], "E1");
    assert_eq!(body["sync"], json!({"synced": true, "action": "created"}));

    // The reconciler left a matching link row behind
    let (status, links) = request(&app, "GET", "/api/admin/linkmaster", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(links.as_array().map(Vec::len), Some(1));
    assert_eq!(links[0]["erpusername"], "erp1");
    assert_eq!(links[0]["apiusername"], "100");
    assert_eq!(links[0]["empname"], "Alice");
    assert_eq!(links[0]["active"], "T");
}

#[tokio::test]
async fn employee_without_erp_reports_skip() {
    let app = test_app().await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/employees",
        Some(json!({"employee_no": "E2", "employee_name": "Bob"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sync"], json!({"synced": false, "reason": "missing_erp"}));

    let (_, links) = request(&app, "GET", "/api/admin/linkmaster", None).await;
    assert_eq!(links.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn employee_update_pushes_changes_to_link_row() {
    let app = test_app().await;

    request(
        &app,
        "POST",
        "/api/employees",
        Some(json!({
            "employee_no": "E1",
            "employee_name": "Alice",
            "erp_username": "erp1"
        })),
    )
    .await;

    let (status, body) = request(
        &app,
        "PUT",
        "/api/employees/E1",
        Some(json!({"employee_name": "Alice Chen", "api_username": "777"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sync"], json!({"synced": true, "action": "updated"}));

    let (_, links) = request(&app, "GET", "/api/admin/linkmaster", None).await;
    assert_eq!(links.as_array().map(Vec::len), Some(1));
    assert_eq!(links[0]["empname"], "Alice Chen");
    assert_eq!(links[0]["apiusername"], "777");
}

#[tokio::test]
async fn employee_deactivate_marks_link_row_inactive() {
    let app = test_app().await;

    request(
        &app,
        "POST",
        "/api/employees",
        Some(json!({
            "employee_no": "E1",
            "employee_name": "Alice",
            "erp_username": "erp1"
        })),
    )
    .await;

    let (status, body) = request(&app, "DELETE", "/api/employees/E1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["employee"]["is_active"], false);
    assert_eq!(body["sync"], json!({"synced": true, "action": "updated"}));

    let (_, links) = request(&app, "GET", "/api/admin/linkmaster", None).await;
    assert_eq!(links[0]["active"], "F");
}

#[tokio::test]
async fn missing_employee_yields_error_body() {
    let app = test_app().await;

    let (status, body) = request(&app, "GET", "/api/employees/NOPE", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().expect("error message").contains("NOPE"));
}

#[tokio::test]
async fn linkmaster_admin_enforces_single_effective_row() {
    let app = test_app().await;

    let (status, created) = request(
        &app,
        "POST",
        "/api/admin/linkmaster",
        Some(json!({"linkno": "X1", "erpusername": "erp9", "apiusername": "55"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["kbs_api_linkmasterid"].as_i64().expect("row id");

    // A second effective row for the same ERP username is rejected
    let (status, body) = request(
        &app,
        "POST",
        "/api/admin/linkmaster",
        Some(json!({"linkno": "X2", "erpusername": "erp9"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().expect("error message").contains("erp9"));

    // An inactive one is fine
    let (status, _) = request(
        &app,
        "POST",
        "/api/admin/linkmaster",
        Some(json!({"linkno": "X2", "erpusername": "erp9", "active": "F"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Partial update by id, legacy query-parameter style
    let (status, updated) = request(
        &app,
        "PUT",
        &format!("/api/admin/linkmaster?id={id}"),
        Some(json!({"apiusername": "56"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["apiusername"], "56");
    assert_eq!(updated["erpusername"], "erp9");

    let (status, body) = request(
        &app,
        "PUT",
        "/api/admin/linkmaster?id=9999",
        Some(json!({"apiusername": "1"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn bulk_sync_endpoints_report_counts() {
    let app = test_app().await;

    request(
        &app,
        "POST",
        "/api/employees",
        Some(json!({
            "employee_no": "E9",
            "employee_name": "Cara",
            "erp_username": "erp_e9",
            "api_username": "900"
        })),
    )
    .await;

    // The profile reconciler already created a row keyed on linkno '', so
    // the insert pass still inserts one keyed on linkno = empno
    let (status, body) = request(&app, "POST", "/api/admin/sync-emp-to-linkmaster", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["insertedCount"], 1);
    assert_eq!(body["inserted"][0]["linkno"], "E9");

    let (status, body) = request(&app, "POST", "/api/admin/sync-emp-to-linkmaster", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["insertedCount"], 0);

    let (status, body) = request(&app, "PUT", "/api/admin/sync-emp-to-linkmaster", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"], 1);
    // The linkno '' row from the profile reconciler matches no employee
    assert_eq!(body["orphans"], 1);
}

#[tokio::test]
async fn punch_capture_requires_known_employee() {
    let app = test_app().await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/punches",
        Some(json!({"empno": "GHOST", "punch_type": "IN"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().expect("error message").contains("GHOST"));

    request(
        &app,
        "POST",
        "/api/employees",
        Some(json!({"employee_no": "E1", "employee_name": "Alice"})),
    )
    .await;

    let (status, punch) = request(
        &app,
        "POST",
        "/api/punches",
        Some(json!({"empno": "E1", "punch_type": "IN"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(punch["empno"], "E1");
    assert_eq!(punch["punch_type"], "IN");
    assert_eq!(punch["source"], "manual");

    let (status, listed) = request(&app, "GET", "/api/punches?empno=E1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn master_records_and_audit_trail() {
    let app = test_app().await;

    let (status, company) = request(
        &app,
        "POST",
        "/api/companies",
        Some(json!({"company_code": "C1", "company_name": "Acme"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let company_id = company["id"].as_i64().expect("company id");

    let (status, _) = request(
        &app,
        "POST",
        "/api/branches",
        Some(json!({"branch_code": "B1", "branch_name": "HQ", "company_id": company_id})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Branch creation validates the company reference
    let (status, body) = request(
        &app,
        "POST",
        "/api/branches",
        Some(json!({"branch_code": "B2", "branch_name": "Ghost", "company_id": 9999})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = request(
        &app,
        "POST",
        "/api/roles",
        Some(json!({"role_code": "R1", "role_name": "Clerk"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, entries) = request(&app, "GET", "/api/audit", None).await;
    assert_eq!(status, StatusCode::OK);
    let entries = entries.as_array().expect("audit entries");
    assert!(entries.len() >= 3);
    assert!(entries.iter().any(|e| e["table_name"] == "company_master"));
}
