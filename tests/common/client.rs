use account_service::db::service::DatabaseService;
use account_service::types::session::DBSessionCreate;
use account_service::types::user::{DBUserCreate, RegisterOutcome};
use account_service::utils::token::{construct_token, encrypt, new_token};
use actix_web::{web, App};
use base64::{prelude::BASE64_STANDARD, Engine as _};
use entity::user::Role;
use std::sync::Arc;
use uuid::Uuid;

pub struct TestClient {
    pub db: Arc<DatabaseService>,
}

impl TestClient {
    pub fn new(db: Arc<DatabaseService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(account_service::routes::configure_routes)
    }

    /// Seeds a user straight into the store, bypassing the HTTP surface.
    #[allow(dead_code)]
    pub async fn seed_user(&self, username: &str, email: &str, password: &str, role: Role) -> Uuid {
        let password_hash = encrypt(password).expect("Failed to hash password");

        match self
            .db
            .create_user(DBUserCreate {
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
                role,
            })
            .await
            .expect("Failed to seed user")
        {
            RegisterOutcome::Created(id) => id,
            RegisterOutcome::Conflict { .. } => panic!("Seed user collided with existing data"),
        }
    }

    /// Mints a live session for a user and returns the access token the
    /// client would have received from login.
    #[allow(dead_code)]
    pub async fn issue_token(&self, user_id: Uuid) -> String {
        let secret = new_token();
        let token_hash = encrypt(&secret).expect("Failed to hash session secret");

        let session_id = self
            .db
            .create_session(DBSessionCreate {
                user_id,
                token_hash,
            })
            .await
            .expect("Failed to create session");

        construct_token(&session_id, &secret)
    }

    /// "Authorization: Basic ..." header value for email + password.
    #[allow(dead_code)]
    pub fn basic_auth(email: &str, password: &str) -> String {
        format!(
            "Basic {}",
            BASE64_STANDARD.encode(format!("{email}:{password}"))
        )
    }
}
