//! Data-access layer and HTTP API for the fintech recommender's user profiles.
//!
//! The crate owns the persisted side of the recommender: the user profile with
//! its fixed-point money columns, the transaction ledger and in-app
//! notifications, write-time enforcement of the decimal digit budgets, and the
//! REST surface over all of it. Schema evolution lives in the sibling
//! `migration` crate.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::AppConfig;

pub mod api;
pub mod config;
pub mod entity;
pub mod error;
pub mod response;
pub mod store;
pub mod validation;

#[derive(Clone, Debug)]
pub struct AppResources {
    pub db: Arc<DatabaseConnection>,
    pub config: Arc<AppConfig>,
}
