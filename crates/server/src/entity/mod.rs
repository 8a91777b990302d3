//! SeaORM entities mirroring the migrated schema.

pub mod notifications;
pub mod transactions;
pub mod user_profile;
