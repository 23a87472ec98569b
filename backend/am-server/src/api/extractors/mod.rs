pub mod admin_identity;
pub mod current_identity;
