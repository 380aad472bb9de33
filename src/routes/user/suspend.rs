use crate::db::service::DatabaseService;
use crate::types::error::AppError;
use crate::types::session::RSessionToken;
use crate::types::user::UserSuspendRes;
use crate::utils::token::resolve_token;
use crate::utils::webutils::decode_all;
use actix_web::{delete, web, HttpResponse};
use std::sync::Arc;

/// Soft-suspends the target account. The caller's token travels in the
/// request body; only live admins pass, regardless of who the target is.
#[delete("/{username}")]
async fn suspend(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<String>,
    body: web::Json<RSessionToken>,
) -> Result<HttpResponse, AppError> {
    let caller = match resolve_token(&db, &body.eat).await {
        Ok(user) if !user.suspended && user.role.can_suspend() => user,
        _ => {
            return Ok(HttpResponse::Unauthorized().json(UserSuspendRes {
                msg: "Unauthorized.".to_string(),
            }));
        }
    };

    let target = decode_all(&path)
        .ok_or_else(|| AppError::Validation("invalid username".to_string()))?;
    db.suspend_user(&target).await?;

    log::info!("user {} suspended by {}", target, caller.id);

    Ok(HttpResponse::Ok().json(UserSuspendRes {
        msg: "success".to_string(),
    }))
}
