use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection};
use std::sync::Arc;

use crate::shared::persistence::{classify_db_err, AccountRepositoryError};
use crate::user::application::ports::outgoing::{UserRecord, UserRepository};

use super::sea_orm_entity::users::ActiveModel as UserActiveModel;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn insert_user(&self, record: UserRecord) -> Result<UserRecord, AccountRepositoryError> {
        let active_user: UserActiveModel = record.into();

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(classify_db_err)?;

        UserRecord::try_from(inserted)
    }

    async fn update_user(&self, record: UserRecord) -> Result<UserRecord, AccountRepositoryError> {
        let active_user: UserActiveModel = record.into();

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(classify_db_err)?;

        UserRecord::try_from(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use crate::user::application::domain::UserRole;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use uuid::Uuid;

    fn create_test_record() -> UserRecord {
        let now = Utc::now();
        UserRecord {
            id: Uuid::new_v4(),
            name: "Jane Doe".to_string(),
            email: "user@example.com".to_string(),
            password_hash: "$2b$10$hashedpassword".to_string(),
            mobile_number: "9876543210".to_string(),
            role: UserRole::User,
            is_verified: false,
            is_active: true,
            profile_picture: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    fn to_model(record: &UserRecord) -> UserModel {
        UserModel {
            id: record.id,
            name: record.name.clone(),
            email: record.email.clone(),
            password_hash: record.password_hash.clone(),
            mobile_number: record.mobile_number.clone(),
            role: record.role.as_str().to_string(),
            is_verified: record.is_verified,
            is_active: record.is_active,
            profile_picture: record.profile_picture.clone(),
            created_at: record.created_at.into(),
            updated_at: record.updated_at.into(),
        }
    }

    #[tokio::test]
    async fn test_insert_user_success() {
        let record = create_test_record();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![to_model(&record)]])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let inserted = repository.insert_user(record.clone()).await.unwrap();

        assert_eq!(inserted, record);
    }

    #[tokio::test]
    async fn test_insert_user_duplicate_mobile_number() {
        let storage_message =
            "duplicate key value violates unique constraint \"users_mobile_number_key\"";

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(storage_message.to_string())])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        match repository.insert_user(create_test_record()).await {
            Err(AccountRepositoryError::ConstraintViolation(msg)) => {
                assert!(msg.contains(storage_message));
            }
            other => panic!("Expected ConstraintViolation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_user_persists_activation_flag() {
        let mut record = create_test_record();
        record.is_active = false;
        record.profile_picture = "https://cdn.example.com/jane.png".to_string();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![to_model(&record)]])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let updated = repository.update_user(record).await.unwrap();

        assert!(!updated.is_active);
        assert_eq!(updated.profile_picture, "https://cdn.example.com/jane.png");
    }

    #[tokio::test]
    async fn test_update_user_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let result = repository.update_user(create_test_record()).await;

        assert_eq!(result, Err(AccountRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_stored_admin_role_is_corrupt_record() {
        let record = create_test_record();
        let mut model = to_model(&record);
        model.role = "admin".to_string();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let result = repository.insert_user(record).await;

        assert!(matches!(result, Err(AccountRepositoryError::CorruptRecord(_))));
    }
}
