//! The user profile and its fixed-point financial columns.
//!
//! The decimal budgets declared here ((12, 2) for the money columns, (5, 2)
//! for the saving rate) are enforced at write time by the store layer; the
//! database alone would round or coerce instead of rejecting.

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::Serialize;
use time::OffsetDateTime;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "user_profile")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub risk_profile: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub income_monthly: Decimal,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub percentage_save: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub total_investment: Decimal,
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::transactions::Entity")]
    Transactions,
    #[sea_orm(has_many = "super::notifications::Entity")]
    Notifications,
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl Related<super::notifications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notifications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
