mod filter;
mod forms;
mod models;
mod stats;

use crate::{Asset, Category, Identity, Role};

use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

pub(crate) fn identity(email: &str, role: Role) -> Identity {
    Identity {
        id: Uuid::new_v4(),
        email: email.to_string(),
        full_name: format!("{email} name"),
        role,
        is_active: true,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub(crate) fn category(name: &str) -> Category {
    Category {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: None,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub(crate) fn asset(name: &str, cost: f64, category: Option<&Category>) -> Asset {
    Asset {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category_id: category.map(|c| c.id),
        department_id: None,
        date_purchased: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        cost,
        created_by: None,
        created_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
        icon_name: None,
        image_url: None,
        category: category.cloned(),
        department: None,
        creator: None,
    }
}
