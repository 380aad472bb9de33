use crate::db::service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize)]
pub struct Response {}

/// Liveness probe; also round-trips the database connection.
#[get("")]
async fn health(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
) -> ApiResult<Response> {
    db.ping().await?;

    Ok(ApiResponse::EmptyOk)
}
