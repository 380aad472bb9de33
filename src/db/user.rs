use crate::db::service::DatabaseService;
use crate::types::error::AppError;
use crate::types::user::{DBUserCreate, RegisterOutcome};
use crate::utils::token;
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set, TransactionTrait,
};
use uuid::Uuid;

impl DatabaseService {
    async fn username_taken<C: ConnectionTrait>(conn: &C, username: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(conn)
            .await?
            > 0)
    }

    async fn email_taken<C: ConnectionTrait>(conn: &C, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(conn)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Registration. Both uniqueness checks run regardless of the other's
    /// outcome so the caller can tell exactly which field collided; nothing
    /// is inserted unless both pass.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<RegisterOutcome, AppError> {
        let txn = self.db.begin().await?;

        let username_taken = Self::username_taken(&txn, &payload.username).await?;
        let email_taken = Self::email_taken(&txn, &payload.email).await?;
        if username_taken || email_taken {
            txn.rollback().await?;
            return Ok(RegisterOutcome::Conflict {
                username_taken,
                email_taken,
            });
        }

        let uid = token::new_id();
        let now = Utc::now();

        User::insert(UserActive {
            id: Set(uid),
            username: Set(payload.username),
            email: Set(payload.email),
            password_hash: Set(payload.password_hash),
            role: Set(payload.role),
            suspended: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&txn)
        .await?;

        txn.commit().await?;
        Ok(RegisterOutcome::Created(uid))
    }

    /// Soft suspend: the row stays (usernames and emails remain reserved),
    /// only the flag flips.
    pub async fn suspend_user(&self, username: &str) -> Result<(), AppError> {
        let mut am: UserActive = self.get_user_by_username(username).await?.into();
        am.suspended = Set(true);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await.map(|_| ())?)
    }
}
