use crate::tests::{asset, category};
use crate::{AdminStats, AssetFilter, UserStats};

use proptest::prelude::*;

proptest! {
    #[test]
    fn total_value_equals_sum_of_costs(costs in prop::collection::vec(0u32..1_000_000, 0..40)) {
        let assets: Vec<_> = costs
            .iter()
            .map(|c| asset("item", f64::from(*c), None))
            .collect();

        let stats = AdminStats::compute(&[], &assets, &[], &[]);
        let expected: f64 = costs.iter().map(|c| f64::from(*c)).sum();

        prop_assert_eq!(stats.total_asset_value, expected);
        prop_assert_eq!(stats.total_assets, assets.len());
    }

    #[test]
    fn used_categories_never_exceed_assets_or_categories(picks in prop::collection::vec(0usize..4, 0..30)) {
        let categories: Vec<_> = (0..3).map(|i| category(&format!("C{i}"))).collect();
        // index 3 means "uncategorized"
        let assets: Vec<_> = picks
            .iter()
            .map(|p| asset("item", 1.0, categories.get(*p)))
            .collect();

        let admin = AdminStats::compute(&[], &assets, &categories, &[]);
        let user = UserStats::compute(&assets, &categories);

        prop_assert!(admin.used_categories <= categories.len());
        prop_assert!(admin.used_categories <= assets.len());
        prop_assert_eq!(admin.used_categories, user.categories_used);
        let categorized = picks.iter().filter(|p| **p < 3).count();
        let counted: usize = user.by_category.iter().map(|c| c.count).sum();
        prop_assert_eq!(counted, categorized);
    }

    #[test]
    fn filter_result_is_subset_in_original_order(names in prop::collection::vec("[a-zA-Z]{1,8}", 0..20), needle in "[a-z]{0,2}") {
        let assets: Vec<_> = names.iter().map(|n| asset(n, 1.0, None)).collect();
        let filter = AssetFilter { search: Some(needle.clone()), category_id: None };

        let filtered = filter.apply(&assets);

        prop_assert!(filtered.len() <= assets.len());
        let mut cursor = assets.iter();
        for kept in &filtered {
            prop_assert!(kept.name.to_lowercase().contains(&needle));
            prop_assert!(cursor.any(|a| a.id == kept.id));
        }
    }
}
