use account_service::db::service::DatabaseService;
use sea_orm::ConnectOptions;
use std::sync::Arc;

pub mod client;

pub struct TestContext {
    pub db: Arc<DatabaseService>,
}

impl TestContext {
    /// Every test gets its own private store: an in-memory sqlite database
    /// pinned to a single connection (the database lives exactly as long as
    /// that connection), with migrations applied. Dropping the context
    /// drops the database.
    pub async fn new() -> TestContext {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).sqlx_logging(false);

        let db = Arc::new(
            DatabaseService::new(options)
                .await
                .expect("Failed to initialize DatabaseService"),
        );

        TestContext { db }
    }
}

// Test data helpers
pub mod test_data {
    use account_service::types::user::RUserCreate;
    use entity::user::Role;

    pub fn sample_user(username: &str, email: &str) -> RUserCreate {
        RUserCreate {
            username: username.to_string(),
            email: email.to_string(),
            password: "foobar".to_string(),
            role: None,
        }
    }

    pub fn sample_admin(username: &str, email: &str) -> RUserCreate {
        RUserCreate {
            username: username.to_string(),
            email: email.to_string(),
            password: "foobar123".to_string(),
            role: Some(Role::Admin),
        }
    }
}
