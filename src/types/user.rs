use entity::user::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration request body.
#[derive(Serialize, Deserialize)]
pub struct RUserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<Role>,
}

pub struct DBUserCreate {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

pub enum RegisterOutcome {
    Created(Uuid),
    Conflict {
        username_taken: bool,
        email_taken: bool,
    },
}

/// Registration response. The two pass flags are independent so clients can
/// tell which field collided, even when both did.
#[derive(Serialize, Deserialize)]
pub struct UserCreateRes {
    pub success: bool,
    #[serde(rename = "usernamePass")]
    pub username_pass: bool,
    #[serde(rename = "emailPass")]
    pub email_pass: bool,
}

#[derive(Serialize, Deserialize)]
pub struct UserSuspendRes {
    pub msg: String,
}
