use crate::{Asset, Category, stats::admin_stats::total_value};

use serde::Serialize;

pub const RECENT_ASSET_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Personal dashboard figures for the logged-in user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub asset_count: usize,
    pub total_value: f64,
    /// Number of categories with at least one of the user's assets
    pub categories_used: usize,
    /// Per-category counts in category order, empty categories omitted
    pub by_category: Vec<CategoryCount>,
    /// First few assets in the order given (newest first from the loader)
    pub recent: Vec<Asset>,
}

impl UserStats {
    pub fn compute(assets: &[Asset], categories: &[Category]) -> Self {
        let by_category: Vec<CategoryCount> = categories
            .iter()
            .map(|c| CategoryCount {
                name: c.name.clone(),
                count: assets
                    .iter()
                    .filter(|a| a.category_id == Some(c.id))
                    .count(),
            })
            .filter(|c| c.count > 0)
            .collect();

        Self {
            asset_count: assets.len(),
            total_value: total_value(assets),
            categories_used: by_category.len(),
            by_category,
            recent: assets.iter().take(RECENT_ASSET_COUNT).cloned().collect(),
        }
    }
}
