//! Schema history tests against in-memory SQLite.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement};

async fn fresh_db() -> DatabaseConnection {
    // one pooled connection, otherwise every connection gets its own
    // in-memory database
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1);
    Database::connect(opts).await.unwrap()
}

async fn column_types(db: &DatabaseConnection, table: &str) -> Vec<(String, String)> {
    let rows = db
        .query_all(Statement::from_string(
            DbBackend::Sqlite,
            format!("PRAGMA table_info(\"{table}\")"),
        ))
        .await
        .unwrap();
    rows.iter()
        .map(|row| {
            (
                row.try_get::<String>("", "name").unwrap(),
                row.try_get::<String>("", "type").unwrap(),
            )
        })
        .collect()
}

fn type_of(columns: &[(String, String)], name: &str) -> String {
    columns
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, t)| t.clone())
        .unwrap_or_else(|| panic!("column {name} missing"))
}

#[tokio::test]
async fn migrated_profile_columns_have_final_digit_budgets() {
    let db = fresh_db().await;
    Migrator::up(&db, None).await.unwrap();

    let columns = column_types(&db, "user_profile").await;
    assert_eq!(type_of(&columns, "income_monthly"), "decimal(12, 2)");
    assert_eq!(type_of(&columns, "percentage_save"), "decimal(5, 2)");
    assert_eq!(type_of(&columns, "total_investment"), "decimal(12, 2)");
}

#[tokio::test]
async fn ledger_tables_exist_after_migration() {
    let db = fresh_db().await;
    Migrator::up(&db, None).await.unwrap();

    let transactions = column_types(&db, "transactions").await;
    for column in ["id", "user_profile_id", "amount", "kind", "created_at"] {
        assert!(transactions.iter().any(|(n, _)| n == column));
    }

    let notifications = column_types(&db, "notifications").await;
    for column in ["id", "user_profile_id", "kind", "message", "is_read"] {
        assert!(notifications.iter().any(|(n, _)| n == column));
    }
}

#[test]
fn widening_follows_its_dependency() {
    let names: Vec<String> = Migrator::migrations()
        .iter()
        .map(|m| m.name().to_string())
        .collect();

    // positional order is what the migrator applies; the widening step must
    // come directly after the percentage_save alteration it depends on
    let alter_save = names
        .iter()
        .position(|n| n.contains("alter_user_profile_percentage_save"))
        .unwrap();
    let widen = names
        .iter()
        .position(|n| n.contains("widen_user_profile_decimal_columns"))
        .unwrap();
    assert_eq!(widen, alter_save + 1);
    assert_eq!(widen, names.len() - 1);

    // timestamp prefixes are strictly ascending
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(sorted, names);
}

#[tokio::test]
async fn second_up_is_a_noop() {
    let db = fresh_db().await;
    Migrator::up(&db, None).await.unwrap();
    let before = column_types(&db, "user_profile").await;

    Migrator::up(&db, None).await.unwrap();
    let after = column_types(&db, "user_profile").await;

    assert_eq!(before, after);
    assert!(
        Migrator::get_pending_migrations(&db)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn widening_rolls_back_and_reapplies_to_the_same_schema() {
    let db = fresh_db().await;
    Migrator::up(&db, None).await.unwrap();
    let migrated = column_types(&db, "user_profile").await;

    // roll back only the widening step
    Migrator::down(&db, Some(1)).await.unwrap();
    let rolled_back = column_types(&db, "user_profile").await;
    assert_eq!(type_of(&rolled_back, "income_monthly"), "decimal(10, 2)");
    assert_eq!(type_of(&rolled_back, "percentage_save"), "decimal(5, 2)");
    assert_eq!(type_of(&rolled_back, "total_investment"), "decimal(10, 2)");

    Migrator::up(&db, None).await.unwrap();
    let reapplied = column_types(&db, "user_profile").await;
    assert_eq!(migrated, reapplied);
}

#[tokio::test]
async fn down_walks_back_to_empty() {
    let db = fresh_db().await;
    Migrator::up(&db, None).await.unwrap();
    Migrator::down(&db, None).await.unwrap();

    let tables = db
        .query_all(Statement::from_string(
            DbBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type = 'table' \
             AND name NOT LIKE 'sqlite_%' AND name != 'seaql_migrations'"
                .to_string(),
        ))
        .await
        .unwrap();
    assert!(tables.is_empty());
}
