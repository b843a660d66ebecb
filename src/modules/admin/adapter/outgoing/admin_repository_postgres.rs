use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection};
use std::sync::Arc;

use crate::admin::application::ports::outgoing::{AdminRecord, AdminRepository};
use crate::shared::persistence::{classify_db_err, AccountRepositoryError};

use super::sea_orm_entity::admins::ActiveModel as AdminActiveModel;

#[derive(Clone, Debug)]
pub struct AdminRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminRepository for AdminRepositoryPostgres {
    async fn insert_admin(&self, record: AdminRecord) -> Result<AdminRecord, AccountRepositoryError> {
        let active_admin: AdminActiveModel = record.into();

        let inserted = active_admin
            .insert(&*self.db)
            .await
            .map_err(classify_db_err)?;

        AdminRecord::try_from(inserted)
    }

    async fn update_admin(&self, record: AdminRecord) -> Result<AdminRecord, AccountRepositoryError> {
        let active_admin: AdminActiveModel = record.into();

        let updated = active_admin
            .update(&*self.db)
            .await
            .map_err(classify_db_err)?;

        AdminRecord::try_from(updated)
    }
}
