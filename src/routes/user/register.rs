use crate::db::service::DatabaseService;
use crate::types::error::AppError;
use crate::types::user::{DBUserCreate, RUserCreate, RegisterOutcome, UserCreateRes};
use crate::utils::token::encrypt;
use actix_web::{post, web, HttpResponse};
use std::sync::Arc;

#[post("")]
async fn register(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RUserCreate>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();

    let username = body.username.trim().to_string();
    let email = body.email.trim().to_string();
    if username.is_empty() || email.is_empty() || body.password.is_empty() {
        return Err(AppError::Validation(
            "username, email and password are required".to_string(),
        ));
    }

    let password_hash = encrypt(&body.password)
        .map_err(|_| AppError::Internal("failed to hash password".to_string()))?;

    let outcome = db
        .create_user(DBUserCreate {
            username: username.clone(),
            email,
            password_hash,
            role: body.role.unwrap_or_default(),
        })
        .await?;

    match outcome {
        RegisterOutcome::Created(user_id) => {
            log::info!("registered user {} ({})", username, user_id);
            Ok(HttpResponse::Ok().json(UserCreateRes {
                success: true,
                username_pass: true,
                email_pass: true,
            }))
        }
        RegisterOutcome::Conflict {
            username_taken,
            email_taken,
        } => Ok(HttpResponse::Conflict().json(UserCreateRes {
            success: false,
            username_pass: !username_taken,
            email_pass: !email_taken,
        })),
    }
}
