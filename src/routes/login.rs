use crate::db::service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::{DBSessionCreate, LoginRes};
use crate::utils::token::{construct_token, encrypt, new_token, verify};
use actix_web::{get, web};
use actix_web_httpauth::extractors::basic::BasicAuth;
use std::sync::Arc;

/// Basic-auth login: user-id is the email. A successful login mints a new
/// session; every failure mode looks the same to the caller.
#[get("")]
async fn login(
    _req: actix_web::HttpRequest,
    auth: BasicAuth,
    db: web::Data<Arc<DatabaseService>>,
) -> ApiResult<LoginRes> {
    let email = auth.user_id().trim().to_string();
    let password = auth.password().unwrap_or_default().to_string();
    if email.is_empty() || password.is_empty() {
        return Err(AppError::Unauthorized);
    }

    let user = db
        .get_user_by_email(&email)
        .await
        .map_err(|_| AppError::Unauthorized)?;
    if user.suspended {
        return Err(AppError::Unauthorized);
    }
    match verify(&password, &user.password_hash) {
        Ok(true) => {}
        _ => return Err(AppError::Unauthorized),
    }

    let secret = new_token();
    let token_hash = encrypt(&secret)
        .map_err(|_| AppError::Internal("failed to hash session token".to_string()))?;
    let session_id = db
        .create_session(DBSessionCreate {
            user_id: user.id,
            token_hash,
        })
        .await?;

    log::info!("user {} logged in", user.id);

    Ok(ApiResponse::Ok(LoginRes {
        eat: construct_token(&session_id, &secret),
    }))
}
