//! Sample data for a fresh store.
//!
//! Every insert is guarded by a lookup on its natural key, so seeding twice
//! leaves the store unchanged.

use crate::{
    ASSETS_TABLE, AssetRepository, CategoryRepository, DepartmentRepository, Query, SharedStore,
    StoreErrorResult, UserRepository,
};

use am_core::{AssetDraft, CatalogRow, NewAsset, NewIdentity, Role};

use chrono::NaiveDate;
use log::{info, warn};

const SAMPLE_CATEGORIES: [(&str, &str); 3] = [
    ("Electronics", "Electronic devices and equipment"),
    ("Furniture", "Office furniture and seating"),
    ("Vehicles", "Company vehicles and transportation"),
];

const SAMPLE_DEPARTMENTS: [(&str, &str); 3] = [
    ("IT Department", "Information Technology"),
    ("HR Department", "Human Resources"),
    ("Finance Department", "Financial Operations"),
];

// (email, password, full name, role)
const SAMPLE_USERS: [(&str, &str, &str, Role); 2] = [
    ("admin@eport.cloud", "admin123", "Admin User", Role::Admin),
    ("user@eport.cloud", "user123", "Regular User", Role::User),
];

// (name, category, department, purchased, cost)
const SAMPLE_ASSETS: [(&str, &str, &str, (i32, u32, u32), f64); 3] = [
    ("Dell Laptop", "Electronics", "IT Department", (2024, 1, 15), 1200.00),
    ("Office Desk", "Furniture", "HR Department", (2024, 2, 20), 350.00),
    ("Company Van", "Vehicles", "Finance Department", (2024, 3, 10), 25000.00),
];

const SAMPLE_ASSET_OWNER: &str = "admin@eport.cloud";

/// Rows inserted by one seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub departments: usize,
    pub users: usize,
    pub assets: usize,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.categories + self.departments + self.users + self.assets
    }
}

pub async fn seed_sample_data(store: &SharedStore) -> StoreErrorResult<SeedReport> {
    let mut report = SeedReport::default();

    let categories = CategoryRepository::new(store.clone());
    for (name, description) in SAMPLE_CATEGORIES {
        if categories.find_by_name(name).await?.is_none() {
            categories.create(&catalog_row(name, description)).await?;
            info!("Added category: {name}");
            report.categories += 1;
        }
    }

    let departments = DepartmentRepository::new(store.clone());
    for (name, description) in SAMPLE_DEPARTMENTS {
        if departments.find_by_name(name).await?.is_none() {
            departments.create(&catalog_row(name, description)).await?;
            info!("Added department: {name}");
            report.departments += 1;
        }
    }

    let users = UserRepository::new(store.clone());
    for (email, password, full_name, role) in SAMPLE_USERS {
        if users.find_by_email(email).await?.is_none() {
            users
                .create(&NewIdentity {
                    email: email.to_string(),
                    full_name: full_name.to_string(),
                    password: password.to_string(),
                    role,
                    is_active: true,
                })
                .await?;
            info!("Added user: {email}");
            report.users += 1;
        }
    }

    let owner = users.find_by_email(SAMPLE_ASSET_OWNER).await?.map(|u| u.id);
    let assets = AssetRepository::new(store.clone());
    for (name, category, department, (y, m, d), cost) in SAMPLE_ASSETS {
        let existing = store
            .select(ASSETS_TABLE, &Query::new().select("id").eq("name", name).limit(1))
            .await?;
        if !existing.is_empty() {
            continue;
        }

        let Some(date_purchased) = NaiveDate::from_ymd_opt(y, m, d) else {
            warn!("Skipping sample asset {name}: invalid purchase date");
            continue;
        };

        let draft = AssetDraft {
            name: name.to_string(),
            category_id: categories.find_by_name(category).await?.map(|c| c.id),
            department_id: departments.find_by_name(department).await?.map(|d| d.id),
            date_purchased,
            cost,
            icon_name: None,
        };
        assets
            .create(&NewAsset {
                draft,
                created_by: owner,
            })
            .await?;
        info!("Added asset: {name}");
        report.assets += 1;
    }

    Ok(report)
}

fn catalog_row(name: &str, description: &str) -> CatalogRow {
    CatalogRow {
        name: name.to_string(),
        description: Some(description.to_string()),
    }
}
