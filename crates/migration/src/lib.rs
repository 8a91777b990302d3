pub use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, Statement, TransactionTrait};

mod m20250601_094512_create_user_profile;
mod m20250608_121433_add_transactions_and_notifications;
mod m20250615_103021_alter_user_profile_percentage_save;
mod m20250620_174308_widen_user_profile_decimal_columns;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_094512_create_user_profile::Migration),
            Box::new(m20250608_121433_add_transactions_and_notifications::Migration),
            Box::new(m20250615_103021_alter_user_profile_percentage_save::Migration),
            Box::new(m20250620_174308_widen_user_profile_decimal_columns::Migration),
        ]
    }
}

/// Run a batch of semicolon-separated statements in a single transaction.
pub(crate) async fn run_sql_batch(manager: &SchemaManager<'_>, content: &str) -> Result<(), DbErr> {
    let statements = content.split(';').filter(|s| !s.trim().is_empty());
    let txn = manager.get_connection().begin().await?;
    for st in statements {
        txn.execute(Statement::from_string(
            manager.get_database_backend(),
            st.to_string(),
        ))
        .await
        .map_err(|e| DbErr::Migration(format!("{e}\nQuery: {st}")))?;
    }
    txn.commit().await
}

/// SQLite cannot change a column's type in place, so alter migrations rebuild
/// the table: create it under a scratch name with the target layout, move the
/// rows over, then swap the names. FK enforcement must be off while the old
/// table is gone, and SQLite ignores the pragma inside a transaction, so it is
/// toggled around the batch.
pub(crate) async fn rebuild_sqlite_table(
    manager: &SchemaManager<'_>,
    batch: &str,
) -> Result<(), DbErr> {
    let conn = manager.get_connection();
    conn.execute_unprepared("PRAGMA foreign_keys = OFF").await?;
    let result = run_sql_batch(manager, batch).await;
    conn.execute_unprepared("PRAGMA foreign_keys = ON").await?;
    result
}
