//! File-backed database startup

use attend_server::db::DbService;
use attend_server::{Config, ServerState};

#[tokio::test]
async fn opens_file_database_and_applies_migrations() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db_path = dir.path().join("attend.db");
    let db_path = db_path.to_str().expect("utf-8 path");

    let db = DbService::new(db_path).await.expect("open database");

    // Migrations ran: the link table is queryable
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM kbs_api_linkmaster")
        .fetch_one(&db.pool)
        .await
        .expect("query link table");
    assert_eq!(count, 0);

    // Reopening the same file is fine (migrations are idempotent)
    drop(db);
    DbService::new(db_path).await.expect("reopen database");
}

#[tokio::test]
async fn state_initialize_probes_capabilities() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db_path = dir.path().join("attend.db");

    let config = Config::with_overrides(db_path.to_str().expect("utf-8 path"), 0);
    let state = ServerState::initialize(&config).await.expect("initialize");
    assert!(state.capabilities.emp_api_username);
}
