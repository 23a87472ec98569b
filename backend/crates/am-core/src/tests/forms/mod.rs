mod account_forms;
mod asset_form;
mod catalog_form;
