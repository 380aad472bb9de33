use crate::db::service::DatabaseService;
use crate::types::error::AppError;
use crate::types::session::DBSessionCreate;
use crate::utils::token;
use chrono::Utc;
use entity::session::{ActiveModel as SessionActive, Entity as Session, Model as SessionModel};
use sea_orm::{DbErr, EntityTrait, Set};
use uuid::Uuid;

impl DatabaseService {
    /// Login mints one of these. Only the hash of the secret is stored.
    pub async fn create_session(&self, payload: DBSessionCreate) -> Result<Uuid, AppError> {
        let sid = token::new_id();

        Session::insert(SessionActive {
            id: Set(sid),
            user_id: Set(payload.user_id),
            token_hash: Set(payload.token_hash),
            created_at: Set(Utc::now()),
        })
        .exec(&self.db)
        .await?;

        Ok(sid)
    }

    pub async fn get_session(&self, id: &Uuid) -> Result<SessionModel, AppError> {
        Ok(Session::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Session does not exist".into()))?)
    }
}
