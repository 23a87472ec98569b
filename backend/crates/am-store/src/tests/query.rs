use crate::Query;

use googletest::assert_that;
use googletest::prelude::{elements_are, eq};
use serde_json::json;

fn pair(k: &str, v: &str) -> (String, String) {
    (k.to_string(), v.to_string())
}

#[test]
fn given_default_query_when_to_params_then_selects_all() {
    assert_that!(Query::new().to_params(), elements_are![eq(&pair("select", "*"))]);
}

#[test]
fn given_filters_order_and_limit_when_to_params_then_postgrest_encoding() {
    // Given
    let query = Query::new()
        .select("id,email")
        .eq("email", "a@b.co")
        .eq("is_active", true)
        .order_desc("created_at")
        .limit(10);

    // When
    let params = query.to_params();

    // Then
    assert_that!(
        params,
        elements_are![
            eq(&pair("select", "id,email")),
            eq(&pair("email", "eq.a@b.co")),
            eq(&pair("is_active", "eq.true")),
            eq(&pair("order", "created_at.desc")),
            eq(&pair("limit", "10")),
        ]
    );
}

#[test]
fn given_null_filter_when_to_params_then_is_null() {
    let params = Query::new().eq("category_id", serde_json::Value::Null).to_params();
    assert_that!(params[1], eq(&pair("category_id", "is.null")));
}

#[test]
fn given_row_when_matches_then_all_filters_must_hold() {
    let row = json!({ "email": "a@b.co", "is_active": true, "cost": 1200 });

    assert!(Query::new().eq("email", "a@b.co").matches(&row));
    assert!(Query::new().eq("cost", 1200.0).matches(&row));
    assert!(!Query::new().eq("email", "a@b.co").eq("is_active", false).matches(&row));
    assert!(!Query::new().eq("missing", "x").matches(&row));
}

#[test]
fn given_rows_when_shape_then_ordered_limited_and_projected() {
    // Given
    let rows = vec![
        json!({ "id": "1", "name": "a", "created_at": "2024-01-01T00:00:00+00:00" }),
        json!({ "id": "2", "name": "b", "created_at": "2024-03-01T00:00:00+00:00" }),
        json!({ "id": "3", "name": "c", "created_at": "2024-02-01T00:00:00+00:00" }),
    ];
    let query = Query::newest_first().select("id").limit(2);

    // When
    let shaped = query.shape(rows);

    // Then
    assert_that!(
        shaped,
        elements_are![eq(&json!({ "id": "2" })), eq(&json!({ "id": "3" }))]
    );
}
