use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use uuid::Uuid;

use crate::shared::AccountRepositoryError;
use crate::user::application::ports::outgoing::UserRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    #[sea_orm(unique)]
    pub mobile_number: String,
    pub role: String,
    pub is_verified: bool,
    pub is_active: bool,
    pub profile_picture: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for UserRecord {
    type Error = AccountRepositoryError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let role = model.role.parse().map_err(|_| {
            AccountRepositoryError::CorruptRecord(format!(
                "user {} has unknown role `{}`",
                model.id, model.role
            ))
        })?;

        Ok(UserRecord {
            id: model.id,
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
            mobile_number: model.mobile_number,
            role,
            is_verified: model.is_verified,
            is_active: model.is_active,
            profile_picture: model.profile_picture,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        })
    }
}

impl From<UserRecord> for ActiveModel {
    fn from(record: UserRecord) -> Self {
        ActiveModel {
            id: Set(record.id),
            name: Set(record.name),
            email: Set(record.email),
            password_hash: Set(record.password_hash),
            mobile_number: Set(record.mobile_number),
            role: Set(record.role.as_str().to_string()),
            is_verified: Set(record.is_verified),
            is_active: Set(record.is_active),
            profile_picture: Set(record.profile_picture),
            created_at: Set(record.created_at.into()),
            updated_at: Set(record.updated_at.into()),
        }
    }
}
