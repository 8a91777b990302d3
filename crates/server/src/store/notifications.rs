use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};
use time::OffsetDateTime;

use crate::entity::{notifications, user_profile};
use crate::error::StoreError;
use crate::response::Page;

pub const NOTIFICATION_KINDS: [&str; 3] = ["info", "alert", "recommendation"];

pub struct NewNotification {
    pub user_profile_id: i64,
    pub kind: String,
    pub message: String,
    pub is_read: bool,
}

#[derive(Default)]
pub struct NotificationChanges {
    pub kind: Option<String>,
    pub message: Option<String>,
    pub is_read: Option<bool>,
}

fn check_kind(kind: &str) -> Result<(), StoreError> {
    if !NOTIFICATION_KINDS.contains(&kind) {
        return Err(StoreError::InvalidField {
            field: "kind",
            message: format!(
                "unknown notification kind `{kind}`, expected one of: {}",
                NOTIFICATION_KINDS.join(", ")
            ),
        });
    }
    Ok(())
}

/// One page of notifications, oldest first. `page` is zero-based.
pub async fn list(
    db: &DatabaseConnection,
    page: u64,
    size: u64,
) -> Result<Page<notifications::Model>, StoreError> {
    let paginator = notifications::Entity::find()
        .order_by_asc(notifications::Column::Id)
        .paginate(db, size.max(1));
    let totals = paginator.num_items_and_pages().await?;
    let items = paginator.fetch_page(page).await?;
    Ok(Page {
        items,
        total_pages: totals.number_of_pages,
        total_items: totals.number_of_items,
    })
}

pub async fn by_id(db: &DatabaseConnection, id: i64) -> Result<notifications::Model, StoreError> {
    notifications::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(StoreError::NotFound("notification"))
}

pub async fn create(
    db: &DatabaseConnection,
    new: NewNotification,
) -> Result<notifications::Model, StoreError> {
    check_kind(&new.kind)?;
    if user_profile::Entity::find_by_id(new.user_profile_id)
        .one(db)
        .await?
        .is_none()
    {
        return Err(StoreError::NotFound("profile"));
    }

    let notification = notifications::ActiveModel {
        user_profile_id: Set(new.user_profile_id),
        kind: Set(new.kind),
        message: Set(new.message),
        is_read: Set(new.is_read),
        created_at: Set(OffsetDateTime::now_utc()),
        ..Default::default()
    };
    Ok(notification.insert(db).await?)
}

pub async fn update(
    db: &DatabaseConnection,
    id: i64,
    changes: NotificationChanges,
) -> Result<notifications::Model, StoreError> {
    if let Some(kind) = &changes.kind {
        check_kind(kind)?;
    }

    let mut notification: notifications::ActiveModel = by_id(db, id).await?.into();
    if let Some(v) = changes.kind {
        notification.kind = Set(v);
    }
    if let Some(v) = changes.message {
        notification.message = Set(v);
    }
    if let Some(v) = changes.is_read {
        notification.is_read = Set(v);
    }
    Ok(notification.update(db).await?)
}

pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<(), StoreError> {
    let result = notifications::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(StoreError::NotFound("notification"));
    }
    Ok(())
}
