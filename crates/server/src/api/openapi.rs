//! OpenAPI/Utoipa configuration.

use crate::api::{
    health::MISC_TAG, notifications::NOTIFICATIONS_TAG, profiles::PROFILES_TAG,
    transactions::TRANSACTIONS_TAG,
};
use utoipa::OpenApi;

/// OpenAPI documentation configuration.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fintech Recommender Profile API",
        version = "1.0.0",
        description = "Data-access API for user profiles, their transaction ledger and in-app notifications."
    ),
    tags(
        (name = MISC_TAG, description = "Miscellaneous endpoints"),
        (name = PROFILES_TAG, description = "User profile endpoints"),
        (name = TRANSACTIONS_TAG, description = "Transaction ledger endpoints"),
        (name = NOTIFICATIONS_TAG, description = "Notification endpoints")
    )
)]
pub struct ApiDoc;
