use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub const AUTH_FAIL_REASONS: [&str; 4] = [
    "Incorrect password",
    "incorrect username",
    "account not found",
    "Unknown device",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub ok: bool,
    pub customer_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthErrorBody {
    pub error: String,
    pub reason: String,
    pub customer_id: String,
}

/// Stable customer identifier for a principal: `cust_` plus the first ten hex
/// digits of the username's SHA-256.
pub fn customer_id(username: &str) -> String {
    let digest = Sha256::digest(username.as_bytes());
    let hex = hex::encode(digest);
    format!("cust_{}", &hex[..10])
}
