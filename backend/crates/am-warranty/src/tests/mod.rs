mod wizard;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::Serialize;

#[derive(Serialize)]
struct Claims {
    sub: String,
    exp: i64,
}

/// HS256 token the way the warranty service issues them
pub(crate) fn signed_token(exp: i64) -> String {
    let claims = Claims {
        sub: "warranty-user".to_string(),
        exp,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"warranty-service-secret"),
    )
    .unwrap()
}
