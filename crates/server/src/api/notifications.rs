//! In-app notification endpoints.
//!
//! - `GET /` - paginated listing, oldest first
//! - `POST /` - create a notification for a profile
//! - `GET /{id}` / `PUT /{id}` / `DELETE /{id}` - single-row operations;
//!   `PUT` is also how a notification is marked read

use crate::api::PaginationQuery;
use crate::response::{ErrorResponse, Page};
use crate::store::notifications as notification_store;
use crate::{AppResources, entity::notifications, error::StoreError};
use axum::http::StatusCode;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::ToSchema;
use utoipa_axum::{router::OpenApiRouter, routes};

/// Tag for OpenAPI documentation.
pub const NOTIFICATIONS_TAG: &str = "Notifications API";

#[derive(Deserialize, ToSchema)]
struct CreateNotification {
    user_profile_id: i64,
    /// One of `info`, `alert`, `recommendation`.
    #[schema(example = "recommendation")]
    kind: String,
    message: String,
    #[serde(default)]
    is_read: bool,
}

#[derive(Deserialize, Default, ToSchema)]
struct UpdateNotification {
    kind: Option<String>,
    message: Option<String>,
    is_read: Option<bool>,
}

/// Creates the notifications API router.
pub fn router() -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(list_notifications, create_notification))
        .routes(routes!(get_notification, update_notification, delete_notification))
}

#[tracing::instrument(skip(resources))]
#[utoipa::path(
    get,
    path = "/",
    operation_id = "List Notifications",
    tag = NOTIFICATIONS_TAG,
    summary = "List notifications",
    params(PaginationQuery),
    responses(
        (status = 200, description = "One page of notifications", body = Page<notifications::Model>)
    )
)]
async fn list_notifications(
    Extension(resources): Extension<AppResources>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<Page<notifications::Model>>, StoreError> {
    let (page, size) = params.resolve(&resources.config.pagination);
    Ok(Json(
        notification_store::list(&resources.db, page, size).await?,
    ))
}

#[tracing::instrument(skip(resources, payload))]
#[utoipa::path(
    post,
    path = "/",
    operation_id = "Create Notification",
    tag = NOTIFICATIONS_TAG,
    summary = "Create a notification",
    description = "Creates an in-app notification for an existing profile. The kind is checked \
                   against the allowed set.",
    request_body(content = CreateNotification, description = "Notification fields"),
    responses(
        (status = 201, description = "Notification created", body = notifications::Model),
        (status = 400, description = "Invalid kind", body = ErrorResponse),
        (status = 404, description = "The referenced profile does not exist", body = ErrorResponse)
    )
)]
async fn create_notification(
    Extension(resources): Extension<AppResources>,
    Json(payload): Json<CreateNotification>,
) -> Result<(StatusCode, Json<notifications::Model>), StoreError> {
    let notification = notification_store::create(
        &resources.db,
        notification_store::NewNotification {
            user_profile_id: payload.user_profile_id,
            kind: payload.kind,
            message: payload.message,
            is_read: payload.is_read,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(notification)))
}

#[tracing::instrument(skip(resources))]
#[utoipa::path(
    get,
    path = "/{id}",
    operation_id = "Get Notification",
    tag = NOTIFICATIONS_TAG,
    summary = "Fetch a notification by id",
    responses(
        (status = 200, description = "The notification", body = notifications::Model),
        (status = 404, description = "No notification with this id", body = ErrorResponse)
    )
)]
async fn get_notification(
    Extension(resources): Extension<AppResources>,
    Path(id): Path<i64>,
) -> Result<Json<notifications::Model>, StoreError> {
    Ok(Json(notification_store::by_id(&resources.db, id).await?))
}

#[tracing::instrument(skip(resources, payload))]
#[utoipa::path(
    put,
    path = "/{id}",
    operation_id = "Update Notification",
    tag = NOTIFICATIONS_TAG,
    summary = "Update a notification",
    description = "Partial update; setting `is_read` to true marks the notification as read.",
    request_body(content = UpdateNotification, description = "Fields to change"),
    responses(
        (status = 200, description = "The updated notification", body = notifications::Model),
        (status = 400, description = "Invalid kind", body = ErrorResponse),
        (status = 404, description = "No notification with this id", body = ErrorResponse)
    )
)]
async fn update_notification(
    Extension(resources): Extension<AppResources>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateNotification>,
) -> Result<Json<notifications::Model>, StoreError> {
    let notification = notification_store::update(
        &resources.db,
        id,
        notification_store::NotificationChanges {
            kind: payload.kind,
            message: payload.message,
            is_read: payload.is_read,
        },
    )
    .await?;
    Ok(Json(notification))
}

#[tracing::instrument(skip(resources))]
#[utoipa::path(
    delete,
    path = "/{id}",
    operation_id = "Delete Notification",
    tag = NOTIFICATIONS_TAG,
    summary = "Delete a notification",
    responses(
        (status = 204, description = "Notification deleted"),
        (status = 404, description = "No notification with this id", body = ErrorResponse)
    )
)]
async fn delete_notification(
    Extension(resources): Extension<AppResources>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StoreError> {
    notification_store::delete(&resources.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
