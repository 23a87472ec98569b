pub mod activity;
pub mod activity_list_response;
