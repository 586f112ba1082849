//! Startup and End-to-End Tests
//!
//! These build the full application against a real socket.

use std::net::TcpListener;

use k9_registry::infrastructure::database;
use k9_registry::startup::Application;
use reqwest::StatusCode;
use sqlx::migrate::Migrator;

use crate::common::{dog_payload, test_settings, BASE};

/// Two scripts, the second of which does not parse
async fn broken_migrator() -> Migrator {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("0001_create_table.sql"),
        "CREATE TABLE kennel (id INTEGER PRIMARY KEY);",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("0002_broken_script.sql"),
        "CREATE TABLE kennel_run (id INTEGER PRIMARY KEY",
    )
    .unwrap();
    Migrator::new(dir.path()).await.unwrap()
}

#[tokio::test]
async fn test_failing_migration_aborts_startup_before_binding() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = test_settings(&dir);

    // Reserve a free port, then release it for the application to try
    let port = {
        let probe = TcpListener::bind("127.0.0.1:0").unwrap();
        probe.local_addr().unwrap().port()
    };
    settings.server.port = port;
    let db_settings = settings.database.clone();

    let migrator = broken_migrator().await;
    let result = Application::build_with_migrations(settings, &migrator).await;
    let err = match result {
        Ok(_) => panic!("startup should fail on a broken migration"),
        Err(e) => e,
    };
    assert!(format!("{err:#}").contains("migration"));

    // The port was never taken
    assert!(TcpListener::bind(("127.0.0.1", port)).is_ok());

    // Scripts before the failing one stay applied; the failing one left nothing behind
    let pool = database::create_pool(&db_settings).await.unwrap();
    assert_eq!(database::current_version(&pool).await.unwrap(), Some(1));
}

#[tokio::test]
async fn test_restart_on_existing_database_applies_nothing() {
    let dir = tempfile::tempdir().unwrap();

    let first = Application::build(test_settings(&dir)).await.unwrap();
    drop(first);
    let second = Application::build(test_settings(&dir)).await.unwrap();
    drop(second);

    let pool = database::create_pool(&test_settings(&dir).database)
        .await
        .unwrap();
    let versions = database::applied_versions(&pool).await.unwrap();
    assert_eq!(versions, vec![1, 2, 3]);

    let report = database::run_migrations(&pool).await.unwrap();
    assert_eq!(report.applied_count(), 0);
    assert_eq!(report.current_version, Some(3));
}

#[tokio::test]
async fn test_end_to_end_over_http() {
    let dir = tempfile::tempdir().unwrap();
    let app = Application::build(test_settings(&dir)).await.unwrap();
    let addr = app.local_addr().unwrap();
    let server = tokio::spawn(app.run_until_stopped());

    let client = reqwest::Client::new();
    let base_url = format!("http://{addr}");

    let health = client
        .get(format!("{base_url}/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(health.status(), StatusCode::OK);

    let ready: serde_json::Value = client
        .get(format!("{base_url}/health/ready"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ready["checks"]["schema"]["version"], 3);

    let created = client
        .post(format!("{base_url}{BASE}/dogs"))
        .json(&dog_payload("Rex", "Beagle", "K9 Kennels"))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);

    let list: serde_json::Value = client
        .get(format!("{base_url}{BASE}/dogs"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list["totalSize"], 1);
    assert_eq!(list["content"][0]["name"], "Rex");

    server.abort();
}
