use crate::{Asset, Category, Department, Identity};

use std::collections::HashSet;

use serde::Serialize;

/// Organization-wide dashboard figures
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdminStats {
    pub total_users: usize,
    pub total_assets: usize,
    pub total_categories: usize,
    pub total_departments: usize,
    pub total_asset_value: f64,
    /// Distinct category ids referenced by at least one asset
    pub used_categories: usize,
    /// Distinct department ids referenced by at least one asset
    pub used_departments: usize,
}

impl AdminStats {
    pub fn compute(
        users: &[Identity],
        assets: &[Asset],
        categories: &[Category],
        departments: &[Department],
    ) -> Self {
        let used_categories = assets
            .iter()
            .filter_map(|a| a.category_id)
            .collect::<HashSet<_>>()
            .len();
        let used_departments = assets
            .iter()
            .filter_map(|a| a.department_id)
            .collect::<HashSet<_>>()
            .len();

        Self {
            total_users: users.len(),
            total_assets: assets.len(),
            total_categories: categories.len(),
            total_departments: departments.len(),
            total_asset_value: total_value(assets),
            used_categories,
            used_departments,
        }
    }
}

/// Sum of asset costs; non-finite costs count as zero
pub fn total_value(assets: &[Asset]) -> f64 {
    assets
        .iter()
        .map(|a| if a.cost.is_finite() { a.cost } else { 0.0 })
        .sum()
}
