use crate::{TOKEN_KEY, WarrantyClient, WarrantyError, WarrantyForm, WarrantyWizard, WizardStep};

use am_core::Asset;
use am_session::{KeyValueStore, MemoryKeyValueStore};

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, TimeZone, Utc};
use googletest::assert_that;
use googletest::prelude::{eq, none};
use uuid::Uuid;

fn wizard() -> (WarrantyWizard, Arc<MemoryKeyValueStore>) {
    let state = Arc::new(MemoryKeyValueStore::new());
    let client = WarrantyClient::new(
        "http://127.0.0.1:9/api/warranty",
        Duration::from_secs(1),
        state.clone(),
    )
    .unwrap();
    (WarrantyWizard::new(Arc::new(client)), state)
}

fn asset() -> Asset {
    Asset {
        id: Uuid::new_v4(),
        name: "Dell Laptop".to_string(),
        category_id: None,
        department_id: None,
        date_purchased: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        cost: 1200.0,
        created_by: None,
        created_at: Utc.with_ymd_and_hms(2024, 3, 5, 9, 0, 0).unwrap(),
        icon_name: None,
        image_url: None,
        category: None,
        department: None,
        creator: None,
    }
}

#[test]
fn given_asset_when_open_then_login_step_with_prefilled_form() {
    // Given
    let (wizard, _) = wizard();
    let asset = asset();

    // When
    wizard.open(&asset);

    // Then
    let state = wizard.snapshot();
    assert!(state.open);
    assert_that!(state.step, eq(WizardStep::Login));
    assert_that!(state.form.asset_id, eq(&asset.id.to_string()));
    assert_that!(state.form.asset_name, eq("Dell Laptop"));
    assert_that!(state.form.purchase_date, eq("2024-03-05"));
    assert_that!(state.form.serial_number, eq(""));
    assert_that!(state.error, none());
}

#[tokio::test]
async fn given_login_step_when_submit_warranty_then_invalid_step() {
    // Given
    let (wizard, _) = wizard();
    wizard.open(&asset());

    // When
    let result = wizard.submit_warranty(WarrantyForm::default()).await;

    // Then
    assert!(matches!(result, Err(WarrantyError::InvalidStep { .. })));
}

#[test]
fn given_open_wizard_when_close_then_reset_and_token_cleared() {
    // Given
    let (wizard, state) = wizard();
    wizard.open(&asset());
    state.set(TOKEN_KEY, "stale").unwrap();

    // When
    wizard.close();

    // Then
    assert_that!(wizard.snapshot(), eq(&crate::WizardState::default()));
    assert_that!(state.get(TOKEN_KEY), none());
}

#[test]
fn given_open_wizard_when_back_then_login_step_and_logged_out() {
    // Given
    let (wizard, state) = wizard();
    wizard.open(&asset());
    state.set(TOKEN_KEY, "stale").unwrap();

    // When
    wizard.back();

    // Then
    let snapshot = wizard.snapshot();
    assert!(snapshot.open);
    assert_that!(snapshot.step, eq(WizardStep::Login));
    assert_that!(state.get(TOKEN_KEY), none());
}
