//! Link-master reconciliation behavior

use attend_server::db::MIGRATOR;
use attend_server::db::capabilities::{self, SchemaCapabilities};
use attend_server::db::models::{EmployeeCreate, LinkMasterCreate};
use attend_server::db::repository::{employee, link_master};
use attend_server::sync::{
    ProfileSync, SkipReason, SyncAction, SyncOutcome, run_insert_pass, run_refresh_pass,
    sync_profile_to_link_master,
};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory database");
    MIGRATOR.run(&pool).await.expect("run migrations");
    pool
}

fn emp(no: &str, name: &str, erp: Option<&str>, api: Option<&str>, active: bool) -> EmployeeCreate {
    EmployeeCreate {
        employee_no: no.to_string(),
        employee_name: name.to_string(),
        erp_username: erp.map(str::to_string),
        api_username: api.map(str::to_string),
        is_active: active,
        company_id: None,
        branch_id: None,
    }
}

async fn link_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM kbs_api_linkmaster")
        .fetch_one(pool)
        .await
        .expect("count link rows")
}

#[tokio::test]
async fn profile_without_erp_is_skipped() {
    let pool = test_pool().await;

    let outcome = sync_profile_to_link_master(&pool, &ProfileSync::default())
        .await
        .expect("sync");
    assert_eq!(outcome, SyncOutcome::skipped(SkipReason::MissingErp));

    let empty = sync_profile_to_link_master(
        &pool,
        &ProfileSync {
            erp_username: Some("   ".to_string()),
            ..Default::default()
        },
    )
    .await
    .expect("sync");
    assert_eq!(empty, SyncOutcome::skipped(SkipReason::MissingErp));

    assert_eq!(link_count(&pool).await, 0);
}

#[tokio::test]
async fn profile_creates_row_when_none_matches() {
    let pool = test_pool().await;

    let profile = ProfileSync {
        erp_username: Some("ERP1".to_string()),
        api_username: Some("123".to_string()),
        full_name: Some("Test".to_string()),
        is_active: Some(true),
    };
    let outcome = sync_profile_to_link_master(&pool, &profile)
        .await
        .expect("sync");
    assert_eq!(outcome, SyncOutcome::synced(SyncAction::Created));

    let row = link_master::find_by_erp_username(&pool, "ERP1")
        .await
        .expect("lookup")
        .expect("row created");
    assert_eq!(row.api_username.as_deref(), Some("123"));
    assert_eq!(row.employee_name.as_deref(), Some("Test"));
    assert!(row.active);
    assert!(!row.cancel);
    assert_eq!(link_count(&pool).await, 1);
}

#[tokio::test]
async fn inactive_profile_creates_inactive_row() {
    let pool = test_pool().await;

    let profile = ProfileSync {
        erp_username: Some("ERP9".to_string()),
        is_active: Some(false),
        ..Default::default()
    };
    sync_profile_to_link_master(&pool, &profile)
        .await
        .expect("sync");

    let row = link_master::find_by_erp_username(&pool, "ERP9")
        .await
        .expect("lookup")
        .expect("row created");
    assert!(!row.active);
}

#[tokio::test]
async fn profile_updates_matching_row_by_id() {
    let pool = test_pool().await;

    // Seed a row with a known id, as the legacy admin tool would have
    sqlx::query(
        "INSERT INTO kbs_api_linkmaster (kbs_api_linkmasterid, linkno, erpusername, active, cancel)
         VALUES (7, '', 'erp1', 'T', 'F')",
    )
    .execute(&pool)
    .await
    .expect("seed row");

    let profile = ProfileSync {
        erp_username: Some("erp1".to_string()),
        api_username: Some("999".to_string()),
        full_name: Some("B".to_string()),
        is_active: Some(false),
    };
    let outcome = sync_profile_to_link_master(&pool, &profile)
        .await
        .expect("sync");
    assert_eq!(outcome, SyncOutcome::synced(SyncAction::Updated));

    // Updated in place, never inserted
    assert_eq!(link_count(&pool).await, 1);
    let row = link_master::find_by_id(&pool, 7)
        .await
        .expect("lookup")
        .expect("row 7");
    assert_eq!(row.erp_username, "erp1");
    assert_eq!(row.api_username.as_deref(), Some("999"));
    assert_eq!(row.employee_name.as_deref(), Some("B"));
    assert!(!row.active);
}

#[tokio::test]
async fn bulk_insert_pass_creates_missing_rows() {
    let pool = test_pool().await;
    let caps = capabilities::probe(&pool).await.expect("probe");
    assert!(caps.emp_api_username);

    employee::create(&pool, emp("E1", "A", Some("erp1"), Some("100"), true))
        .await
        .expect("seed employee");

    let report = run_insert_pass(&pool, caps).await.expect("insert pass");
    assert_eq!(report.inserted_count, 1);
    assert_eq!(report.inserted.len(), 1);

    let row = &report.inserted[0];
    assert_eq!(row.link_no, "E1");
    assert_eq!(row.erp_username, "erp1");
    assert_eq!(row.api_username.as_deref(), Some("100"));
    assert_eq!(row.employee_name.as_deref(), Some("A"));
    assert!(row.active);
    assert!(!row.cancel);
}

#[tokio::test]
async fn bulk_insert_pass_is_idempotent() {
    let pool = test_pool().await;
    let caps = capabilities::probe(&pool).await.expect("probe");

    employee::create(&pool, emp("E1", "A", Some("erp1"), Some("100"), true))
        .await
        .expect("seed employee");
    employee::create(&pool, emp("E2", "B", Some("erp2"), Some("200"), true))
        .await
        .expect("seed employee");

    let first = run_insert_pass(&pool, caps).await.expect("first pass");
    assert_eq!(first.inserted_count, 2);

    let second = run_insert_pass(&pool, caps).await.expect("second pass");
    assert_eq!(second.inserted_count, 0);
    assert_eq!(link_count(&pool).await, 2);
}

#[tokio::test]
async fn bulk_insert_pass_skips_inactive_and_cancelled() {
    let pool = test_pool().await;
    let caps = capabilities::probe(&pool).await.expect("probe");

    employee::create(&pool, emp("E1", "A", Some("erp1"), None, true))
        .await
        .expect("seed employee");
    employee::create(&pool, emp("E2", "B", Some("erp2"), None, false))
        .await
        .expect("seed employee");
    let cancelled = emp("E3", "C", Some("erp3"), None, true);
    employee::create(&pool, cancelled).await.expect("seed employee");
    sqlx::query("UPDATE emp_master SET cancel = 'T' WHERE empno = 'E3'")
        .execute(&pool)
        .await
        .expect("cancel employee");

    let report = run_insert_pass(&pool, caps).await.expect("insert pass");
    assert_eq!(report.inserted_count, 1);
    assert_eq!(report.inserted[0].link_no, "E1");
}

#[tokio::test]
async fn bulk_insert_pass_aborts_on_first_error_keeping_prior_rows() {
    let pool = test_pool().await;
    let caps = capabilities::probe(&pool).await.expect("probe");

    employee::create(&pool, emp("E1", "A", Some("erp1"), None, true))
        .await
        .expect("seed employee");
    employee::create(&pool, emp("E2", "B", Some("erp2"), None, true))
        .await
        .expect("seed employee");
    employee::create(&pool, emp("E3", "C", Some("erp3"), None, true))
        .await
        .expect("seed employee");

    // Simulate a store failure on the second row of the sweep
    sqlx::query(
        "CREATE TRIGGER fail_on_e2 BEFORE INSERT ON kbs_api_linkmaster
         WHEN NEW.linkno = 'E2'
         BEGIN SELECT RAISE(ABORT, 'simulated store failure'); END",
    )
    .execute(&pool)
    .await
    .expect("create trigger");

    let err = run_insert_pass(&pool, caps)
        .await
        .expect_err("pass should abort");
    assert!(err.to_string().contains("simulated store failure"));

    // E1 stays committed, E3 was never reached
    assert_eq!(link_count(&pool).await, 1);
    let row = link_master::find_by_erp_username(&pool, "erp1")
        .await
        .expect("lookup")
        .expect("E1 row");
    assert_eq!(row.link_no, "E1");

    // Rerunning after removing the fault completes the sweep
    sqlx::query("DROP TRIGGER fail_on_e2")
        .execute(&pool)
        .await
        .expect("drop trigger");
    let report = run_insert_pass(&pool, caps).await.expect("rerun");
    assert_eq!(report.inserted_count, 2);
    assert_eq!(link_count(&pool).await, 3);
}

#[tokio::test]
async fn bulk_insert_pass_degrades_without_api_username_capability() {
    let pool = test_pool().await;

    employee::create(&pool, emp("E1", "A", Some("erp1"), Some("100"), true))
        .await
        .expect("seed employee");

    let degraded = SchemaCapabilities {
        emp_api_username: false,
    };
    let report = run_insert_pass(&pool, degraded).await.expect("insert pass");
    assert_eq!(report.inserted_count, 1);
    assert!(report.inserted[0].api_username.is_none());
}

#[tokio::test]
async fn refresh_pass_overwrites_denormalized_fields_and_counts_orphans() {
    let pool = test_pool().await;
    let caps = capabilities::probe(&pool).await.expect("probe");

    employee::create(&pool, emp("E1", "Old Name", Some("erp1"), Some("100"), true))
        .await
        .expect("seed employee");
    run_insert_pass(&pool, caps).await.expect("insert pass");

    // Orphan row: no employee has empno 'ZZ'
    link_master::create(
        &pool,
        LinkMasterCreate {
            link_no: Some("ZZ".to_string()),
            erp_username: "orphan".to_string(),
            api_username: None,
            employee_name: None,
            applicable_from: None,
            applicable_to: None,
            active: false,
            cancel: false,
        },
    )
    .await
    .expect("seed orphan");

    // Directory moves on
    employee::update(
        &pool,
        "E1",
        attend_server::db::models::EmployeeUpdate {
            employee_name: Some("New Name".to_string()),
            api_username: Some("777".to_string()),
            ..Default::default()
        },
    )
    .await
    .expect("update employee");

    let report = run_refresh_pass(&pool).await.expect("refresh pass");
    assert_eq!(report.updated, 1);
    assert_eq!(report.orphans, 1);

    let row = link_master::find_by_erp_username(&pool, "erp1")
        .await
        .expect("lookup")
        .expect("E1 row");
    assert_eq!(row.employee_name.as_deref(), Some("New Name"));
    assert_eq!(row.api_username.as_deref(), Some("777"));

    // Orphan untouched
    let orphan = link_master::find_by_erp_username(&pool, "orphan")
        .await
        .expect("lookup")
        .expect("orphan row");
    assert!(orphan.employee_name.is_none());
}
