use crate::AssetFilter;
use crate::tests::{asset, category};

#[test]
fn given_search_when_applied_then_case_insensitive_match() {
    let assets = vec![
        asset("Dell Laptop", 1200.0, None),
        asset("Office Desk", 350.0, None),
    ];
    let filter = AssetFilter {
        search: Some("LAPTOP".into()),
        category_id: None,
    };

    let filtered = filter.apply(&assets);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Dell Laptop");
}

#[test]
fn given_category_when_applied_then_only_that_category() {
    let electronics = category("Electronics");
    let furniture = category("Furniture");
    let assets = vec![
        asset("Dell Laptop", 1200.0, Some(&electronics)),
        asset("Office Desk", 350.0, Some(&furniture)),
        asset("Cable", 5.0, None),
    ];
    let filter = AssetFilter {
        search: None,
        category_id: Some(furniture.id),
    };

    let filtered = filter.apply(&assets);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Office Desk");
}

#[test]
fn given_empty_filter_when_applied_then_everything_kept() {
    let assets = vec![asset("A", 1.0, None), asset("B", 2.0, None)];

    assert_eq!(AssetFilter::default().apply(&assets).len(), 2);
}
