pub mod activity;
pub mod assets;
pub mod catalog;
pub mod dashboard;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod session;
pub mod users;
pub mod warranty;
