//! Persistence operations over the entities.
//!
//! Every write path runs incoming fixed-point values through
//! [`crate::validation::decimal_budget`] before touching the database, so an
//! over-budget value fails the request instead of being rounded by Postgres
//! or stored verbatim by SQLite.

pub mod notifications;
pub mod profiles;
pub mod transactions;
