use crate::CatalogForm;

#[test]
fn given_empty_description_when_validated_then_none() {
    let row = CatalogForm {
        name: "Electronics".into(),
        description: "  ".into(),
    }
    .validate()
    .unwrap();

    assert_eq!(row.name, "Electronics");
    assert_eq!(row.description, None);
}

#[test]
fn given_description_when_validated_then_trimmed() {
    let row = CatalogForm {
        name: " Furniture ".into(),
        description: " Office furniture ".into(),
    }
    .validate()
    .unwrap();

    assert_eq!(row.name, "Furniture");
    assert_eq!(row.description.as_deref(), Some("Office furniture"));
}

#[test]
fn given_blank_name_when_validated_then_rejected() {
    let err = CatalogForm::default().validate().unwrap_err();

    assert_eq!(err.field(), Some("name"));
}
