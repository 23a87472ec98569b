use crate::{AssetForm, CostInput, CoreError};

use chrono::NaiveDate;
use uuid::Uuid;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn valid_form() -> AssetForm {
    AssetForm {
        name: "Dell Laptop".into(),
        category_id: String::new(),
        department_id: String::new(),
        date_purchased: "2024-01-15".into(),
        cost: CostInput::Text("1200.00".into()),
        icon_name: None,
    }
}

fn field_of(err: CoreError) -> String {
    err.field().unwrap_or_default().to_string()
}

#[test]
fn given_valid_form_when_validated_then_draft_has_parsed_values() {
    let draft = valid_form().validate(today()).unwrap();

    assert_eq!(draft.name, "Dell Laptop");
    assert_eq!(draft.cost, 1200.0);
    assert_eq!(
        draft.date_purchased,
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    );
    assert!(draft.category_id.is_none());
    assert!(draft.department_id.is_none());
}

#[test]
fn given_future_purchase_date_when_validated_then_rejected() {
    let mut form = valid_form();
    form.date_purchased = "2024-06-02".into();

    let err = form.validate(today()).unwrap_err();

    assert_eq!(field_of(err), "date_purchased");
}

#[test]
fn given_purchase_date_today_when_validated_then_accepted() {
    let mut form = valid_form();
    form.date_purchased = "2024-06-01".into();

    assert!(form.validate(today()).is_ok());
}

#[test]
fn given_negative_cost_when_validated_then_rejected() {
    let mut form = valid_form();
    form.cost = CostInput::Number(-1.0);

    let err = form.validate(today()).unwrap_err();

    assert_eq!(field_of(err), "cost");
}

#[test]
fn given_unparseable_cost_when_validated_then_rejected() {
    let mut form = valid_form();
    form.cost = CostInput::Text("twelve".into());

    assert_eq!(field_of(form.validate(today()).unwrap_err()), "cost");
}

#[test]
fn given_blank_name_when_validated_then_rejected() {
    let mut form = valid_form();
    form.name = "   ".into();

    assert_eq!(field_of(form.validate(today()).unwrap_err()), "name");
}

#[test]
fn given_category_id_when_validated_then_parsed() {
    let id = Uuid::new_v4();
    let mut form = valid_form();
    form.category_id = id.to_string();

    let draft = form.validate(today()).unwrap();

    assert_eq!(draft.category_id, Some(id));
}

#[test]
fn given_malformed_department_id_when_validated_then_rejected() {
    let mut form = valid_form();
    form.department_id = "not-a-uuid".into();

    assert_eq!(
        field_of(form.validate(today()).unwrap_err()),
        "department_id"
    );
}

#[test]
fn given_json_number_cost_when_deserialized_then_accepted() {
    let form: AssetForm = serde_json::from_value(serde_json::json!({
        "name": "Desk",
        "date_purchased": "2024-02-20",
        "cost": 350
    }))
    .unwrap();

    let draft = form.validate(today()).unwrap();

    assert_eq!(draft.cost, 350.0);
}

#[test]
fn given_asset_when_form_prefilled_then_round_trips_through_validation() {
    let asset = crate::tests::asset("Office Desk", 350.0, None);

    let draft = AssetForm::from_asset(&asset).validate(today()).unwrap();

    assert_eq!(draft.name, asset.name);
    assert_eq!(draft.date_purchased, asset.date_purchased);
}
