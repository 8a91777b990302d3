//! Transaction ledger endpoints.
//!
//! - `GET /` - paginated listing, oldest first
//! - `POST /` - record a transaction against a profile
//! - `GET /{id}` / `PUT /{id}` / `DELETE /{id}` - single-row operations

use crate::api::PaginationQuery;
use crate::response::{ErrorResponse, Page};
use crate::store::transactions as tx_store;
use crate::{AppResources, entity::transactions, error::StoreError};
use axum::http::StatusCode;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use utoipa_axum::{router::OpenApiRouter, routes};

/// Tag for OpenAPI documentation.
pub const TRANSACTIONS_TAG: &str = "Transactions API";

#[derive(Deserialize, ToSchema)]
struct CreateTransaction {
    user_profile_id: i64,
    /// Decimal string, at most 12 digits with 2 after the decimal point.
    #[schema(example = "150.00")]
    amount: Decimal,
    /// One of `deposit`, `withdrawal`, `buy`, `sell`.
    #[schema(example = "deposit")]
    kind: String,
    description: Option<String>,
}

#[derive(Deserialize, Default, ToSchema)]
struct UpdateTransaction {
    amount: Option<Decimal>,
    kind: Option<String>,
    description: Option<String>,
}

/// Creates the transactions API router.
pub fn router() -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(list_transactions, create_transaction))
        .routes(routes!(get_transaction, update_transaction, delete_transaction))
}

#[tracing::instrument(skip(resources))]
#[utoipa::path(
    get,
    path = "/",
    operation_id = "List Transactions",
    tag = TRANSACTIONS_TAG,
    summary = "List transactions",
    params(PaginationQuery),
    responses(
        (status = 200, description = "One page of transactions", body = Page<transactions::Model>)
    )
)]
async fn list_transactions(
    Extension(resources): Extension<AppResources>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<Page<transactions::Model>>, StoreError> {
    let (page, size) = params.resolve(&resources.config.pagination);
    Ok(Json(tx_store::list(&resources.db, page, size).await?))
}

#[tracing::instrument(skip(resources, payload))]
#[utoipa::path(
    post,
    path = "/",
    operation_id = "Record Transaction",
    tag = TRANSACTIONS_TAG,
    summary = "Record a transaction",
    description = "Records a ledger entry for an existing profile. The amount is checked against \
                   the money digit budget, the kind against the allowed set.",
    request_body(content = CreateTransaction, description = "Transaction fields"),
    responses(
        (status = 201, description = "Transaction recorded", body = transactions::Model),
        (status = 400, description = "Invalid amount or kind", body = ErrorResponse),
        (status = 404, description = "The referenced profile does not exist", body = ErrorResponse)
    )
)]
async fn create_transaction(
    Extension(resources): Extension<AppResources>,
    Json(payload): Json<CreateTransaction>,
) -> Result<(StatusCode, Json<transactions::Model>), StoreError> {
    let tx = tx_store::record(
        &resources.db,
        tx_store::NewTransaction {
            user_profile_id: payload.user_profile_id,
            amount: payload.amount,
            kind: payload.kind,
            description: payload.description,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(tx)))
}

#[tracing::instrument(skip(resources))]
#[utoipa::path(
    get,
    path = "/{id}",
    operation_id = "Get Transaction",
    tag = TRANSACTIONS_TAG,
    summary = "Fetch a transaction by id",
    responses(
        (status = 200, description = "The transaction", body = transactions::Model),
        (status = 404, description = "No transaction with this id", body = ErrorResponse)
    )
)]
async fn get_transaction(
    Extension(resources): Extension<AppResources>,
    Path(id): Path<i64>,
) -> Result<Json<transactions::Model>, StoreError> {
    Ok(Json(tx_store::by_id(&resources.db, id).await?))
}

#[tracing::instrument(skip(resources, payload))]
#[utoipa::path(
    put,
    path = "/{id}",
    operation_id = "Update Transaction",
    tag = TRANSACTIONS_TAG,
    summary = "Update a transaction",
    request_body(content = UpdateTransaction, description = "Fields to change"),
    responses(
        (status = 200, description = "The updated transaction", body = transactions::Model),
        (status = 400, description = "Invalid amount or kind", body = ErrorResponse),
        (status = 404, description = "No transaction with this id", body = ErrorResponse)
    )
)]
async fn update_transaction(
    Extension(resources): Extension<AppResources>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTransaction>,
) -> Result<Json<transactions::Model>, StoreError> {
    let tx = tx_store::update(
        &resources.db,
        id,
        tx_store::TransactionChanges {
            amount: payload.amount,
            kind: payload.kind,
            description: payload.description,
        },
    )
    .await?;
    Ok(Json(tx))
}

#[tracing::instrument(skip(resources))]
#[utoipa::path(
    delete,
    path = "/{id}",
    operation_id = "Delete Transaction",
    tag = TRANSACTIONS_TAG,
    summary = "Delete a transaction",
    responses(
        (status = 204, description = "Transaction deleted"),
        (status = 404, description = "No transaction with this id", body = ErrorResponse)
    )
)]
async fn delete_transaction(
    Extension(resources): Extension<AppResources>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StoreError> {
    tx_store::delete(&resources.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
