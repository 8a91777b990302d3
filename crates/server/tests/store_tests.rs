//! Store-level CRUD and write-time enforcement of the decimal budgets.

use fintech_recommender::entity::{transactions as tx_entity, user_profile};
use fintech_recommender::error::{BudgetError, StoreError};
use fintech_recommender::store::{notifications, profiles, transactions};
use migration::{Migrator, MigratorTrait};
use rust_decimal::Decimal;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, EntityTrait, PaginatorTrait};
use std::str::FromStr;

async fn migrated_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1);
    let db = Database::connect(opts).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn sample_profile() -> profiles::NewProfile {
    profiles::NewProfile {
        risk_profile: Some("Explorador de nuevos caminos".to_string()),
        income_monthly: dec("2500.00"),
        percentage_save: dec("12.50"),
        total_investment: dec("10000.00"),
    }
}

#[tokio::test]
async fn create_and_fetch_profile() {
    let db = migrated_db().await;
    let created = profiles::create(&db, sample_profile()).await.unwrap();

    let fetched = profiles::by_id(&db, created.id).await.unwrap();
    assert_eq!(fetched.income_monthly, dec("2500.00"));
    assert_eq!(fetched.percentage_save, dec("12.50"));
    assert_eq!(fetched.total_investment, dec("10000.00"));
    assert_eq!(
        fetched.risk_profile.as_deref(),
        Some("Explorador de nuevos caminos")
    );
}

#[tokio::test]
async fn over_budget_income_is_rejected_and_nothing_is_written() {
    let db = migrated_db().await;
    let mut new = sample_profile();
    new.income_monthly = dec("10000000000.00"); // first value past NUMERIC(12, 2)

    let err = profiles::create(&db, new).await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::Budget(BudgetError::PrecisionExceeded {
            field: "income_monthly",
            ..
        })
    ));
    assert_eq!(user_profile::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn over_scale_value_is_rejected_not_truncated() {
    let db = migrated_db().await;
    let mut new = sample_profile();
    new.total_investment = dec("9999.999");

    let err = profiles::create(&db, new).await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::Budget(BudgetError::ScaleExceeded {
            field: "total_investment",
            ..
        })
    ));
    assert_eq!(user_profile::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn boundary_values_are_stored_exactly() {
    let db = migrated_db().await;
    let created = profiles::create(
        &db,
        profiles::NewProfile {
            risk_profile: None,
            income_monthly: dec("9999999999.99"),
            percentage_save: dec("100.00"),
            total_investment: dec("0.00"),
        },
    )
    .await
    .unwrap();

    let fetched = profiles::by_id(&db, created.id).await.unwrap();
    assert_eq!(fetched.income_monthly, dec("9999999999.99"));
    assert_eq!(fetched.percentage_save, dec("100.00"));
}

#[tokio::test]
async fn partial_update_only_touches_provided_fields() {
    let db = migrated_db().await;
    let created = profiles::create(&db, sample_profile()).await.unwrap();

    let updated = profiles::update(
        &db,
        created.id,
        profiles::ProfileChanges {
            income_monthly: Some(dec("3200.00")),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.income_monthly, dec("3200.00"));
    assert_eq!(updated.percentage_save, dec("12.50"));
    assert_eq!(updated.total_investment, dec("10000.00"));
}

#[tokio::test]
async fn update_rejects_out_of_range_save_rate_and_keeps_old_value() {
    let db = migrated_db().await;
    let created = profiles::create(&db, sample_profile()).await.unwrap();

    let err = profiles::update(
        &db,
        created.id,
        profiles::ProfileChanges {
            percentage_save: Some(dec("120.00")),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Budget(BudgetError::OutOfRange {
            field: "percentage_save",
            ..
        })
    ));

    let fetched = profiles::by_id(&db, created.id).await.unwrap();
    assert_eq!(fetched.percentage_save, dec("12.50"));
}

#[tokio::test]
async fn missing_profile_operations_return_not_found() {
    let db = migrated_db().await;

    assert!(matches!(
        profiles::by_id(&db, 42).await.unwrap_err(),
        StoreError::NotFound("profile")
    ));
    assert!(matches!(
        profiles::delete(&db, 42).await.unwrap_err(),
        StoreError::NotFound("profile")
    ));
}

#[tokio::test]
async fn recording_a_transaction_requires_an_existing_profile() {
    let db = migrated_db().await;

    let err = transactions::record(
        &db,
        transactions::NewTransaction {
            user_profile_id: 42,
            amount: dec("150.00"),
            kind: "deposit".to_string(),
            description: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, StoreError::NotFound("profile")));
}

#[tokio::test]
async fn unknown_transaction_kind_is_rejected() {
    let db = migrated_db().await;
    let profile = profiles::create(&db, sample_profile()).await.unwrap();

    let err = transactions::record(
        &db,
        transactions::NewTransaction {
            user_profile_id: profile.id,
            amount: dec("150.00"),
            kind: "transfer".to_string(),
            description: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(
        err,
        StoreError::InvalidField { field: "kind", .. }
    ));
}

#[tokio::test]
async fn transaction_listing_pages_in_insertion_order() {
    let db = migrated_db().await;
    let profile = profiles::create(&db, sample_profile()).await.unwrap();

    for i in 1..=5 {
        transactions::record(
            &db,
            transactions::NewTransaction {
                user_profile_id: profile.id,
                amount: dec(&format!("{i}.00")),
                kind: "deposit".to_string(),
                description: Some(format!("entry {i}")),
            },
        )
        .await
        .unwrap();
    }

    let first = transactions::list(&db, 0, 2).await.unwrap();
    assert_eq!(first.total_items, 5);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.items.len(), 2);
    assert_eq!(first.items[0].amount, dec("1.00"));

    let last = transactions::list(&db, 2, 2).await.unwrap();
    assert_eq!(last.items.len(), 1);
    assert_eq!(last.items[0].amount, dec("5.00"));
}

#[tokio::test]
async fn transaction_amount_budget_applies_on_update() {
    let db = migrated_db().await;
    let profile = profiles::create(&db, sample_profile()).await.unwrap();
    let tx = transactions::record(
        &db,
        transactions::NewTransaction {
            user_profile_id: profile.id,
            amount: dec("150.00"),
            kind: "buy".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();

    let err = transactions::update(
        &db,
        tx.id,
        transactions::TransactionChanges {
            amount: Some(dec("0.005")),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Budget(BudgetError::ScaleExceeded { field: "amount", .. })
    ));
}

#[tokio::test]
async fn notification_create_and_mark_read() {
    let db = migrated_db().await;
    let profile = profiles::create(&db, sample_profile()).await.unwrap();

    let created = notifications::create(
        &db,
        notifications::NewNotification {
            user_profile_id: profile.id,
            kind: "recommendation".to_string(),
            message: "Consider raising your saving rate".to_string(),
            is_read: false,
        },
    )
    .await
    .unwrap();
    assert!(!created.is_read);

    let updated = notifications::update(
        &db,
        created.id,
        notifications::NotificationChanges {
            is_read: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(updated.is_read);
    assert_eq!(updated.message, "Consider raising your saving rate");
}

#[tokio::test]
async fn unknown_notification_kind_is_rejected() {
    let db = migrated_db().await;
    let profile = profiles::create(&db, sample_profile()).await.unwrap();

    let err = notifications::create(
        &db,
        notifications::NewNotification {
            user_profile_id: profile.id,
            kind: "sms".to_string(),
            message: "hello".to_string(),
            is_read: false,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(
        err,
        StoreError::InvalidField { field: "kind", .. }
    ));
}

#[tokio::test]
async fn deleting_a_profile_cascades_to_its_rows() {
    let db = migrated_db().await;
    let profile = profiles::create(&db, sample_profile()).await.unwrap();
    transactions::record(
        &db,
        transactions::NewTransaction {
            user_profile_id: profile.id,
            amount: dec("10.00"),
            kind: "deposit".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();

    profiles::delete(&db, profile.id).await.unwrap();
    assert_eq!(tx_entity::Entity::find().count(&db).await.unwrap(), 0);
}
