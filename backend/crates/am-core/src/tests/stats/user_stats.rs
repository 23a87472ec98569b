use crate::UserStats;
use crate::tests::{asset, category};

#[test]
fn given_assets_when_computed_then_breakdown_skips_empty_categories() {
    let electronics = category("Electronics");
    let furniture = category("Furniture");
    let vehicles = category("Vehicles");
    let assets = vec![
        asset("Dell Laptop", 1200.0, Some(&electronics)),
        asset("Monitor", 300.0, Some(&electronics)),
        asset("Office Desk", 350.0, Some(&furniture)),
    ];

    let stats = UserStats::compute(&assets, &[electronics, furniture, vehicles]);

    assert_eq!(stats.asset_count, 3);
    assert_eq!(stats.total_value, 1850.0);
    assert_eq!(stats.categories_used, 2);
    assert_eq!(stats.by_category[0].name, "Electronics");
    assert_eq!(stats.by_category[0].count, 2);
    assert_eq!(stats.by_category[1].name, "Furniture");
    assert_eq!(stats.by_category[1].count, 1);
}

#[test]
fn given_many_assets_when_computed_then_recent_limited_to_five() {
    let assets: Vec<_> = (0..8).map(|i| asset(&format!("A{i}"), 1.0, None)).collect();

    let stats = UserStats::compute(&assets, &[]);

    assert_eq!(stats.recent.len(), 5);
    assert_eq!(stats.recent[0].name, "A0");
    assert_eq!(stats.recent[4].name, "A4");
}
