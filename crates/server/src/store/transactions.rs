use rust_decimal::Decimal;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};
use time::OffsetDateTime;

use crate::entity::{transactions, user_profile};
use crate::error::StoreError;
use crate::response::Page;
use crate::validation::decimal_budget;

pub const TRANSACTION_KINDS: [&str; 4] = ["deposit", "withdrawal", "buy", "sell"];

pub struct NewTransaction {
    pub user_profile_id: i64,
    pub amount: Decimal,
    pub kind: String,
    pub description: Option<String>,
}

#[derive(Default)]
pub struct TransactionChanges {
    pub amount: Option<Decimal>,
    pub kind: Option<String>,
    pub description: Option<String>,
}

fn check_kind(kind: &str) -> Result<(), StoreError> {
    if !TRANSACTION_KINDS.contains(&kind) {
        return Err(StoreError::InvalidField {
            field: "kind",
            message: format!(
                "unknown transaction kind `{kind}`, expected one of: {}",
                TRANSACTION_KINDS.join(", ")
            ),
        });
    }
    Ok(())
}

/// One page of the ledger, oldest first. `page` is zero-based.
pub async fn list(
    db: &DatabaseConnection,
    page: u64,
    size: u64,
) -> Result<Page<transactions::Model>, StoreError> {
    let paginator = transactions::Entity::find()
        .order_by_asc(transactions::Column::Id)
        .paginate(db, size.max(1));
    let totals = paginator.num_items_and_pages().await?;
    let items = paginator.fetch_page(page).await?;
    Ok(Page {
        items,
        total_pages: totals.number_of_pages,
        total_items: totals.number_of_items,
    })
}

pub async fn by_id(db: &DatabaseConnection, id: i64) -> Result<transactions::Model, StoreError> {
    transactions::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(StoreError::NotFound("transaction"))
}

pub async fn record(
    db: &DatabaseConnection,
    new: NewTransaction,
) -> Result<transactions::Model, StoreError> {
    decimal_budget::MONEY.check("amount", new.amount)?;
    check_kind(&new.kind)?;
    if user_profile::Entity::find_by_id(new.user_profile_id)
        .one(db)
        .await?
        .is_none()
    {
        return Err(StoreError::NotFound("profile"));
    }

    let tx = transactions::ActiveModel {
        user_profile_id: Set(new.user_profile_id),
        amount: Set(new.amount),
        kind: Set(new.kind),
        description: Set(new.description),
        created_at: Set(OffsetDateTime::now_utc()),
        ..Default::default()
    };
    Ok(tx.insert(db).await?)
}

pub async fn update(
    db: &DatabaseConnection,
    id: i64,
    changes: TransactionChanges,
) -> Result<transactions::Model, StoreError> {
    if let Some(v) = changes.amount {
        decimal_budget::MONEY.check("amount", v)?;
    }
    if let Some(kind) = &changes.kind {
        check_kind(kind)?;
    }

    let mut tx: transactions::ActiveModel = by_id(db, id).await?.into();
    if let Some(v) = changes.amount {
        tx.amount = Set(v);
    }
    if let Some(v) = changes.kind {
        tx.kind = Set(v);
    }
    if let Some(v) = changes.description {
        tx.description = Set(Some(v));
    }
    Ok(tx.update(db).await?)
}

pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<(), StoreError> {
    let result = transactions::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(StoreError::NotFound("transaction"));
    }
    Ok(())
}
