use account_service::config::EnvConfig;
use account_service::db::service::DatabaseService;
use account_service::routes::configure_routes;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let db = Arc::new(
        DatabaseService::new(config.db_url.as_str())
            .await
            .expect("Failed to initialize DatabaseService"),
    );

    log::info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&db)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
