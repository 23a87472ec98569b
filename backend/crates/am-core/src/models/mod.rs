pub mod activity_log;
pub mod asset;
pub mod catalog;
pub mod identity;
pub mod role;
