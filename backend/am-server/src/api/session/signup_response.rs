use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub email: String,
    pub message: String,
}
