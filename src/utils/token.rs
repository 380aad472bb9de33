use crate::db::service::DatabaseService;
use crate::types::error::AppError;
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, prelude::BASE64_STANDARD, Engine as _};
use entity::user::Model as UserModel;
use rand_core::{OsRng, RngCore};
use uuid::Uuid;

pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

/// Fresh session secret. Url-safe alphabet keeps it free of the '.'
/// separator used by construct_token.
pub fn new_token() -> String {
    let mut buf = [0u8; 32];
    let mut rng = OsRng;
    rng.fill_bytes(&mut buf);
    format!("tok_{}", URL_SAFE_NO_PAD.encode(buf))
}

pub fn encrypt(secret: &str) -> Result<String, argon2::password_hash::Error> {
    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::default().hash_password(secret.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify(secret: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(secret.as_bytes(), &parsed)
        .is_ok())
}

/// The credential handed to clients: base64 of "<session id>.<secret>".
pub fn construct_token(session_id: &Uuid, secret: &str) -> String {
    BASE64_STANDARD.encode(format!("{session_id}.{secret}"))
}

pub fn extract_token_parts(token: &str) -> Option<(Uuid, String)> {
    let decoded = BASE64_STANDARD.decode(token).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (id, secret) = decoded.split_once('.')?;
    if secret.is_empty() {
        return None;
    }
    let id = Uuid::parse_str(id).ok()?;
    Some((id, secret.to_string()))
}

/// Resolves an access token to the user holding it. Malformed tokens,
/// unknown sessions and secret mismatches all collapse into Unauthorized;
/// callers decide what a live user is allowed to do.
pub async fn resolve_token(db: &DatabaseService, token: &str) -> Result<UserModel, AppError> {
    let (session_id, secret) = extract_token_parts(token).ok_or(AppError::Unauthorized)?;

    let session = db
        .get_session(&session_id)
        .await
        .map_err(|_| AppError::Unauthorized)?;

    match verify(&secret, &session.token_hash) {
        Ok(true) => {}
        _ => return Err(AppError::Unauthorized),
    }

    db.get_user_by_id(&session.user_id)
        .await
        .map_err(|_| AppError::Unauthorized)
}
