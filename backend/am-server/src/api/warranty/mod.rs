pub mod open_warranty_request;
pub mod warranty;
pub mod warranty_login_request;
pub mod warranty_register_response;
