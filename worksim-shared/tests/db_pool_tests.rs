/// Integration tests for the SQLite connection pool
///
/// Each test opens its own file inside a temp directory.
/// Run with: cargo test -p worksim-shared --test db_pool_tests

use sqlx::Row;
use tempfile::TempDir;
use worksim_shared::db::pool::{close_pool, create_pool, health_check, DatabaseConfig};

#[tokio::test]
async fn test_create_pool_creates_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pool.sqlite");

    let result = create_pool(&DatabaseConfig::new(&path)).await;
    assert!(result.is_ok(), "Failed to create pool: {:?}", result.err());

    let pool = result.unwrap();
    assert!(path.exists(), "Database file should be created");
    close_pool(pool).await;
}

#[tokio::test]
async fn test_create_pool_without_create_if_missing() {
    let dir = TempDir::new().unwrap();
    let config = DatabaseConfig {
        create_if_missing: false,
        ..DatabaseConfig::new(dir.path().join("absent.sqlite"))
    };

    let result = create_pool(&config).await;
    assert!(result.is_err(), "Should fail when the file does not exist");
}

#[tokio::test]
async fn test_health_check_success() {
    let dir = TempDir::new().unwrap();
    let pool = create_pool(&DatabaseConfig::new(dir.path().join("health.sqlite")))
        .await
        .unwrap();

    assert!(health_check(&pool).await.is_ok());
    close_pool(pool).await;
}

#[tokio::test]
async fn test_foreign_keys_enabled() {
    let dir = TempDir::new().unwrap();
    let pool = create_pool(&DatabaseConfig::new(dir.path().join("fk.sqlite")))
        .await
        .unwrap();

    let row = sqlx::query("PRAGMA foreign_keys").fetch_one(&pool).await.unwrap();
    let enabled: i64 = row.get(0);
    assert_eq!(enabled, 1);

    close_pool(pool).await;
}

#[tokio::test]
async fn test_foreign_keys_can_be_disabled() {
    let dir = TempDir::new().unwrap();
    let config = DatabaseConfig {
        foreign_keys: false,
        ..DatabaseConfig::new(dir.path().join("nofk.sqlite"))
    };
    let pool = create_pool(&config).await.unwrap();

    let row = sqlx::query("PRAGMA foreign_keys").fetch_one(&pool).await.unwrap();
    let enabled: i64 = row.get(0);
    assert_eq!(enabled, 0);

    close_pool(pool).await;
}

#[tokio::test]
async fn test_data_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reopen.sqlite");

    let pool = create_pool(&DatabaseConfig::new(&path)).await.unwrap();
    sqlx::query("CREATE TABLE probe (value INTEGER NOT NULL)")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO probe (value) VALUES (7)")
        .execute(&pool)
        .await
        .unwrap();
    close_pool(pool).await;

    let pool = create_pool(&DatabaseConfig::new(&path)).await.unwrap();
    let (value,): (i64,) = sqlx::query_as("SELECT value FROM probe")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(value, 7);
    close_pool(pool).await;
}

#[tokio::test]
async fn test_transaction_commit_and_rollback() {
    let dir = TempDir::new().unwrap();
    let pool = create_pool(&DatabaseConfig::new(dir.path().join("tx.sqlite")))
        .await
        .unwrap();
    sqlx::query("CREATE TABLE probe (value INTEGER NOT NULL)")
        .execute(&pool)
        .await
        .unwrap();

    // Committed writes are visible
    let mut tx = pool.begin().await.expect("Failed to begin transaction");
    sqlx::query("INSERT INTO probe (value) VALUES (1)")
        .execute(&mut *tx)
        .await
        .expect("Failed to insert in transaction");
    tx.commit().await.expect("Failed to commit transaction");

    // Rolled back writes are not
    let mut tx = pool.begin().await.expect("Failed to begin transaction");
    sqlx::query("INSERT INTO probe (value) VALUES (2)")
        .execute(&mut *tx)
        .await
        .expect("Failed to insert in transaction");
    tx.rollback().await.expect("Failed to rollback transaction");

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM probe")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);

    close_pool(pool).await;
}
