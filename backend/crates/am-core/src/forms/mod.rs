pub mod account_forms;
pub mod asset_form;
pub mod catalog_form;
