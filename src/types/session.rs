use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body carrying the caller's access token.
#[derive(Serialize, Deserialize)]
pub struct RSessionToken {
    pub eat: String,
}

pub struct DBSessionCreate {
    pub user_id: Uuid,
    pub token_hash: String,
}

/// Login response: "eat" is the opaque bearer credential.
#[derive(Serialize, Deserialize)]
pub struct LoginRes {
    pub eat: String,
}
