// adapter/outgoing/admin_query_postgres.rs
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::admin::application::ports::outgoing::{AdminQuery, AdminRecord};
use crate::shared::persistence::{classify_db_err, AccountRepositoryError};

use super::sea_orm_entity::admins::{Column as AdminColumn, Entity as AdminEntity, Model};

#[derive(Clone, Debug)]
pub struct AdminQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_record(model: Option<Model>) -> Result<Option<AdminRecord>, AccountRepositoryError> {
        model.map(AdminRecord::try_from).transpose()
    }
}

#[async_trait]
impl AdminQuery for AdminQueryPostgres {
    async fn find_by_id(&self, admin_id: Uuid) -> Result<Option<AdminRecord>, AccountRepositoryError> {
        let admin = AdminEntity::find_by_id(admin_id)
            .one(&*self.db)
            .await
            .map_err(classify_db_err)?;

        Self::to_record(admin)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AdminRecord>, AccountRepositoryError> {
        let admin = AdminEntity::find()
            .filter(AdminColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(classify_db_err)?;

        Self::to_record(admin)
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminRecord>, AccountRepositoryError> {
        let admin = AdminEntity::find()
            .filter(AdminColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(classify_db_err)?;

        Self::to_record(admin)
    }
}
