pub mod catalog;
pub mod catalog_list_response;
pub mod catalog_response;
