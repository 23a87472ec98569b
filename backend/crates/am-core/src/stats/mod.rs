pub mod admin_stats;
pub mod currency;
pub mod user_stats;
