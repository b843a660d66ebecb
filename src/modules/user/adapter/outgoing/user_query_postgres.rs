use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::shared::persistence::{classify_db_err, AccountRepositoryError};
use crate::user::application::ports::outgoing::{UserQuery, UserRecord};

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_one_by(
        &self,
        column: UserColumn,
        value: &str,
    ) -> Result<Option<UserRecord>, AccountRepositoryError> {
        UserEntity::find()
            .filter(column.eq(value))
            .one(&*self.db)
            .await
            .map_err(classify_db_err)?
            .map(UserRecord::try_from)
            .transpose()
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserRecord>, AccountRepositoryError> {
        UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(classify_db_err)?
            .map(UserRecord::try_from)
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AccountRepositoryError> {
        self.find_one_by(UserColumn::Email, email).await
    }

    async fn find_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> Result<Option<UserRecord>, AccountRepositoryError> {
        self.find_one_by(UserColumn::MobileNumber, mobile_number)
            .await
    }
}
