use log::info;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

#[derive(Clone)]
pub struct DatabaseService {
    pub(crate) db: DatabaseConnection,
}

impl DatabaseService {
    /// Connects and brings the schema up to date. Takes anything SeaORM can
    /// turn into connect options (a postgres URL in production, tuned
    /// in-memory sqlite options in the test fixtures).
    pub async fn new<C>(options: C) -> Result<Self, DbErr>
    where
        C: Into<ConnectOptions>,
    {
        info!("Connecting to database...");
        let db = Database::connect(options).await?;
        info!("Running migrations...");
        Migrator::up(&db, None).await?;
        info!("Migrations finished.");
        Ok(Self { db })
    }

    pub async fn ping(&self) -> Result<(), DbErr> {
        self.db.ping().await
    }
}
