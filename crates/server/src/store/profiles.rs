use rust_decimal::Decimal;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};
use time::OffsetDateTime;

use crate::entity::user_profile;
use crate::error::StoreError;
use crate::validation::decimal_budget::{self, check_save_rate};

pub struct NewProfile {
    pub risk_profile: Option<String>,
    pub income_monthly: Decimal,
    pub percentage_save: Decimal,
    pub total_investment: Decimal,
}

#[derive(Default)]
pub struct ProfileChanges {
    pub risk_profile: Option<String>,
    pub income_monthly: Option<Decimal>,
    pub percentage_save: Option<Decimal>,
    pub total_investment: Option<Decimal>,
}

pub async fn create(
    db: &DatabaseConnection,
    new: NewProfile,
) -> Result<user_profile::Model, StoreError> {
    decimal_budget::MONEY.check("income_monthly", new.income_monthly)?;
    check_save_rate("percentage_save", new.percentage_save)?;
    decimal_budget::MONEY.check("total_investment", new.total_investment)?;

    let profile = user_profile::ActiveModel {
        risk_profile: Set(new.risk_profile),
        income_monthly: Set(new.income_monthly),
        percentage_save: Set(new.percentage_save),
        total_investment: Set(new.total_investment),
        updated_at: Set(OffsetDateTime::now_utc()),
        ..Default::default()
    };
    Ok(profile.insert(db).await?)
}

pub async fn by_id(db: &DatabaseConnection, id: i64) -> Result<user_profile::Model, StoreError> {
    user_profile::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(StoreError::NotFound("profile"))
}

/// Partial update: only the provided fields change, all of them validated
/// before the row is touched.
pub async fn update(
    db: &DatabaseConnection,
    id: i64,
    changes: ProfileChanges,
) -> Result<user_profile::Model, StoreError> {
    if let Some(v) = changes.income_monthly {
        decimal_budget::MONEY.check("income_monthly", v)?;
    }
    if let Some(v) = changes.percentage_save {
        check_save_rate("percentage_save", v)?;
    }
    if let Some(v) = changes.total_investment {
        decimal_budget::MONEY.check("total_investment", v)?;
    }

    let mut profile: user_profile::ActiveModel = by_id(db, id).await?.into();
    if let Some(v) = changes.risk_profile {
        profile.risk_profile = Set(Some(v));
    }
    if let Some(v) = changes.income_monthly {
        profile.income_monthly = Set(v);
    }
    if let Some(v) = changes.percentage_save {
        profile.percentage_save = Set(v);
    }
    if let Some(v) = changes.total_investment {
        profile.total_investment = Set(v);
    }
    profile.updated_at = Set(OffsetDateTime::now_utc());
    Ok(profile.update(db).await?)
}

pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<(), StoreError> {
    let result = user_profile::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(StoreError::NotFound("profile"));
    }
    Ok(())
}
