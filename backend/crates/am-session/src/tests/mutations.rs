use crate::tests::fixture;
use crate::{AssetCreated, RefreshBus, SessionError, create_asset};

use am_core::{AssetForm, CostInput, Identity, Role};
use am_store::{ACTIVITY_LOGS_TABLE, ASSETS_TABLE, ActivityLogRepository, DataStore, Query};

use chrono::{NaiveDate, Utc};
use googletest::assert_that;
use googletest::prelude::{eq, len, some};
use uuid::Uuid;

fn creator() -> Identity {
    Identity {
        id: Uuid::new_v4(),
        email: "user@eport.cloud".to_string(),
        full_name: "Regular User".to_string(),
        role: Role::User,
        is_active: true,
        created_at: Utc::now(),
    }
}

fn form(date: &str) -> AssetForm {
    AssetForm {
        name: "Dell Laptop".to_string(),
        date_purchased: date.to_string(),
        cost: CostInput::Text("1200.00".to_string()),
        ..AssetForm::default()
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

#[tokio::test]
async fn given_valid_form_when_create_asset_then_asset_log_and_refresh() {
    // Given
    let f = fixture();
    let bus = RefreshBus::new();
    let user = creator();

    // When
    let AssetCreated { asset, tick } = create_asset(&f.store, &bus, &user, &form("2024-01-15"), today())
        .await
        .unwrap();

    // Then
    assert_that!(asset.created_by, some(eq(user.id)));
    assert_that!(asset.cost, eq(1200.0));
    assert_that!(tick, eq(1));
    assert_that!(bus.current(), eq(1));

    let logs = ActivityLogRepository::new(f.store.clone()).recent(10).await.unwrap();
    assert_that!(logs, len(eq(1)));
    assert_that!(logs[0].action, eq("Created asset"));
    assert_that!(logs[0].entity_type, some(eq("asset")));
    assert_that!(logs[0].entity_id, some(eq(asset.id)));
    assert_that!(logs[0].details, some(eq("Dell Laptop")));
}

#[tokio::test]
async fn given_future_purchase_date_when_create_asset_then_rejected_before_store() {
    // Given
    let f = fixture();
    let bus = RefreshBus::new();

    // When
    let result = create_asset(&f.store, &bus, &creator(), &form("2024-06-02"), today()).await;

    // Then
    match result {
        Err(SessionError::Validation { source, .. }) => {
            assert_that!(source.field(), some(eq("date_purchased")));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    let rows = f.store.select(ASSETS_TABLE, &Query::new()).await.unwrap();
    assert_that!(rows, len(eq(0)));
    let logs = f.store.select(ACTIVITY_LOGS_TABLE, &Query::new()).await.unwrap();
    assert_that!(logs, len(eq(0)));
    assert_that!(bus.current(), eq(0));
}

#[tokio::test]
async fn given_negative_cost_when_create_asset_then_rejected() {
    let f = fixture();
    let bus = RefreshBus::new();
    let mut negative = form("2024-01-15");
    negative.cost = CostInput::Number(-1.0);

    let result = create_asset(&f.store, &bus, &creator(), &negative, today()).await;

    assert!(matches!(result, Err(SessionError::Validation { .. })));
    assert_that!(bus.current(), eq(0));
}
