use actix_web::web;

pub mod health;
pub mod login;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(web::scope("/health").service(health::health))
            .service(web::scope("/login").service(login::login))
            .service(
                web::scope("/users")
                    .service(user::register::register)
                    .service(user::suspend::suspend),
            ),
    );
}
