//! User profile endpoints.
//!
//! Provides CRUD over the persisted profile:
//! - `POST /` - create a profile
//! - `GET /{id}` - fetch a profile
//! - `PUT /{id}` - partially update a profile
//! - `DELETE /{id}` - delete a profile (transactions and notifications cascade)

use crate::{AppResources, entity::user_profile, error::StoreError, store::profiles};
use axum::http::StatusCode;
use axum::{Extension, Json, extract::Path};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::response::ErrorResponse;

/// Tag for OpenAPI documentation.
pub const PROFILES_TAG: &str = "Profiles API";

#[derive(Deserialize, ToSchema)]
struct CreateProfile {
    risk_profile: Option<String>,
    /// Decimal string, at most 12 digits with 2 after the decimal point.
    #[schema(example = "2500.00")]
    income_monthly: Decimal,
    /// Decimal string between 0 and 100, at most 2 digits after the decimal point.
    #[schema(example = "12.50")]
    percentage_save: Decimal,
    /// Decimal string, at most 12 digits with 2 after the decimal point.
    #[schema(example = "10000.00")]
    total_investment: Decimal,
}

#[derive(Deserialize, Default, ToSchema)]
struct UpdateProfile {
    risk_profile: Option<String>,
    income_monthly: Option<Decimal>,
    percentage_save: Option<Decimal>,
    total_investment: Option<Decimal>,
}

/// Creates the profiles API router.
pub fn router() -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(create_profile))
        .routes(routes!(get_profile, update_profile, delete_profile))
}

#[tracing::instrument(skip(resources, payload))]
#[utoipa::path(
    post,
    path = "/",
    operation_id = "Create Profile",
    tag = PROFILES_TAG,
    summary = "Create a user profile",
    description = "Stores a new user profile. Every fixed-point field is checked against its digit \
                   budget before the row is written; values that would lose digits are rejected, \
                   never truncated.",
    request_body(content = CreateProfile, description = "Profile fields"),
    responses(
        (status = 201, description = "Profile created", body = user_profile::Model),
        (status = 400, description = "A submitted value exceeds its digit budget", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn create_profile(
    Extension(resources): Extension<AppResources>,
    Json(payload): Json<CreateProfile>,
) -> Result<(StatusCode, Json<user_profile::Model>), StoreError> {
    let profile = profiles::create(
        &resources.db,
        profiles::NewProfile {
            risk_profile: payload.risk_profile,
            income_monthly: payload.income_monthly,
            percentage_save: payload.percentage_save,
            total_investment: payload.total_investment,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

#[tracing::instrument(skip(resources))]
#[utoipa::path(
    get,
    path = "/{id}",
    operation_id = "Get Profile",
    tag = PROFILES_TAG,
    summary = "Fetch a user profile by id",
    responses(
        (status = 200, description = "The profile", body = user_profile::Model),
        (status = 404, description = "No profile with this id", body = ErrorResponse)
    )
)]
async fn get_profile(
    Extension(resources): Extension<AppResources>,
    Path(id): Path<i64>,
) -> Result<Json<user_profile::Model>, StoreError> {
    Ok(Json(profiles::by_id(&resources.db, id).await?))
}

#[tracing::instrument(skip(resources, payload))]
#[utoipa::path(
    put,
    path = "/{id}",
    operation_id = "Update Profile",
    tag = PROFILES_TAG,
    summary = "Update a user profile",
    description = "Partial update: only the provided fields change. Fixed-point fields are checked \
                   against their digit budgets before the row is touched.",
    request_body(content = UpdateProfile, description = "Fields to change"),
    responses(
        (status = 200, description = "The updated profile", body = user_profile::Model),
        (status = 400, description = "A submitted value exceeds its digit budget", body = ErrorResponse),
        (status = 404, description = "No profile with this id", body = ErrorResponse)
    )
)]
async fn update_profile(
    Extension(resources): Extension<AppResources>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProfile>,
) -> Result<Json<user_profile::Model>, StoreError> {
    let profile = profiles::update(
        &resources.db,
        id,
        profiles::ProfileChanges {
            risk_profile: payload.risk_profile,
            income_monthly: payload.income_monthly,
            percentage_save: payload.percentage_save,
            total_investment: payload.total_investment,
        },
    )
    .await?;
    Ok(Json(profile))
}

#[tracing::instrument(skip(resources))]
#[utoipa::path(
    delete,
    path = "/{id}",
    operation_id = "Delete Profile",
    tag = PROFILES_TAG,
    summary = "Delete a user profile",
    responses(
        (status = 204, description = "Profile deleted"),
        (status = 404, description = "No profile with this id", body = ErrorResponse)
    )
)]
async fn delete_profile(
    Extension(resources): Extension<AppResources>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StoreError> {
    profiles::delete(&resources.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
