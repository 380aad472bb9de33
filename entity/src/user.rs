use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Closed permission set, stored as a string column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[sea_orm(string_value = "regular")]
    Regular,
    #[sea_orm(string_value = "admin")]
    Admin,
}

impl Role {
    /// Admins may suspend any account; regular users may suspend none,
    /// their own included.
    pub fn can_suspend(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Regular
    }
}

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    // Argon2 PHC string. Never leaves the service.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub suspended: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::session::Entity")]
    Session,
}

impl Related<super::session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::Role;

    #[test]
    fn only_admins_can_suspend() {
        assert!(Role::Admin.can_suspend());
        assert!(!Role::Regular.can_suspend());
    }

    #[test]
    fn role_defaults_to_regular() {
        assert_eq!(Role::default(), Role::Regular);
    }

    #[test]
    fn role_uses_lowercase_wire_names() {
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
        assert_eq!(serde_json::to_string(&Role::Regular).unwrap(), "\"regular\"");
    }
}
