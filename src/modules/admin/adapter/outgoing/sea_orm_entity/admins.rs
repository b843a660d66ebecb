use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use uuid::Uuid;

use crate::admin::application::ports::outgoing::AdminRecord;
use crate::shared::AccountRepositoryError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "admins")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for AdminRecord {
    type Error = AccountRepositoryError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let role = model.role.parse().map_err(|_| {
            AccountRepositoryError::CorruptRecord(format!(
                "admin {} has unknown role `{}`",
                model.id, model.role
            ))
        })?;

        Ok(AdminRecord {
            id: model.id,
            username: model.username,
            email: model.email,
            password_hash: model.password_hash,
            role,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        })
    }
}

impl From<AdminRecord> for ActiveModel {
    fn from(record: AdminRecord) -> Self {
        ActiveModel {
            id: Set(record.id),
            username: Set(record.username),
            email: Set(record.email),
            password_hash: Set(record.password_hash),
            role: Set(record.role.as_str().to_string()),
            created_at: Set(record.created_at.into()),
            updated_at: Set(record.updated_at.into()),
        }
    }
}
