use crate::tests::{asset, category, identity};
use crate::{AdminStats, Role};

#[test]
fn given_seeded_lists_when_computed_then_counts_and_value_match() {
    let electronics = category("Electronics");
    let furniture = category("Furniture");
    let vehicles = category("Vehicles");
    let users = vec![
        identity("admin@eport.cloud", Role::Admin),
        identity("user@eport.cloud", Role::User),
    ];
    let assets = vec![
        asset("Dell Laptop", 1200.0, Some(&electronics)),
        asset("Office Desk", 350.0, Some(&furniture)),
        asset("Monitor", 250.5, Some(&electronics)),
        asset("Loose Cable", 4.5, None),
    ];
    let categories = vec![electronics, furniture, vehicles];

    let stats = AdminStats::compute(&users, &assets, &categories, &[]);

    assert_eq!(stats.total_users, 2);
    assert_eq!(stats.total_assets, 4);
    assert_eq!(stats.total_categories, 3);
    assert_eq!(stats.total_departments, 0);
    assert_eq!(stats.total_asset_value, 1805.0);
    assert_eq!(stats.used_categories, 2);
    assert_eq!(stats.used_departments, 0);
}

#[test]
fn given_no_data_when_computed_then_all_zero() {
    assert_eq!(AdminStats::compute(&[], &[], &[], &[]), AdminStats::default());
}
