use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DbBackend;

use crate::m20250601_094512_create_user_profile::UserProfile;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Bring the three numeric profile columns to their final digit budgets:
/// `income_monthly` and `total_investment` go from decimal(10, 2) to
/// decimal(12, 2), `percentage_save` is re-asserted at decimal(5, 2).
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.get_database_backend() == DbBackend::Sqlite {
            return crate::rebuild_sqlite_table(manager, &rebuild_batch("decimal(12, 2)")).await;
        }

        manager
            .alter_table(
                Table::alter()
                    .table(UserProfile::Table)
                    .modify_column(
                        ColumnDef::new(UserProfile::IncomeMonthly)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(UserProfile::Table)
                    .modify_column(
                        ColumnDef::new(UserProfile::PercentageSave)
                            .decimal_len(5, 2)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(UserProfile::Table)
                    .modify_column(
                        ColumnDef::new(UserProfile::TotalInvestment)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.get_database_backend() == DbBackend::Sqlite {
            return crate::rebuild_sqlite_table(manager, &rebuild_batch("decimal(10, 2)")).await;
        }

        manager
            .alter_table(
                Table::alter()
                    .table(UserProfile::Table)
                    .modify_column(
                        ColumnDef::new(UserProfile::IncomeMonthly)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(UserProfile::Table)
                    .modify_column(
                        ColumnDef::new(UserProfile::TotalInvestment)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }
}

fn rebuild_batch(money_type: &str) -> String {
    format!(
        r#"
        CREATE TABLE "user_profile_rebuild" (
            "id" integer NOT NULL PRIMARY KEY AUTOINCREMENT,
            "risk_profile" varchar NULL,
            "income_monthly" {money_type} NOT NULL,
            "percentage_save" decimal(5, 2) NOT NULL,
            "total_investment" {money_type} NOT NULL,
            "updated_at" timestamp NOT NULL DEFAULT CURRENT_TIMESTAMP
        );
        INSERT INTO "user_profile_rebuild"
            SELECT "id", "risk_profile", "income_monthly", "percentage_save", "total_investment", "updated_at"
            FROM "user_profile";
        DROP TABLE "user_profile";
        ALTER TABLE "user_profile_rebuild" RENAME TO "user_profile"
        "#
    )
}
