mod admin_stats;
mod currency;
mod property_tests;
mod user_stats;
