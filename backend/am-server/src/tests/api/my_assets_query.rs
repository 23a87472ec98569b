use crate::MyAssetsQuery;

use googletest::assert_that;
use googletest::prelude::{eq, none, some};
use uuid::Uuid;

#[test]
fn given_empty_category_when_to_filter_then_no_category_filter() {
    let query = MyAssetsQuery {
        search: Some("dell".into()),
        category_id: Some(String::new()),
    };

    let filter = query.to_filter().unwrap();

    assert_that!(filter.category_id, none());
    assert_that!(filter.search, some(eq("dell")));
}

#[test]
fn given_category_uuid_when_to_filter_then_parsed() {
    let id = Uuid::new_v4();
    let query = MyAssetsQuery {
        search: None,
        category_id: Some(id.to_string()),
    };

    let filter = query.to_filter().unwrap();

    assert_that!(filter.category_id, some(eq(id)));
}

#[test]
fn given_garbage_category_when_to_filter_then_error() {
    let query = MyAssetsQuery {
        search: None,
        category_id: Some("electronics".into()),
    };

    assert!(query.to_filter().is_err());
}
