use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::admin::application::ports::outgoing::{AdminQuery, AdminRecord, AdminRepository};
use crate::shared::AccountRepositoryError;
use crate::user::application::ports::outgoing::{UserQuery, UserRecord, UserRepository};

fn duplicate_key(constraint: &str) -> AccountRepositoryError {
    AccountRepositoryError::ConstraintViolation(format!(
        "duplicate key value violates unique constraint \"{constraint}\""
    ))
}

/// Admin table stand-in with the same unique keys as the real one.
/// Clones share rows.
#[derive(Clone, Default)]
pub struct InMemoryAdminStore {
    rows: Arc<Mutex<HashMap<Uuid, AdminRecord>>>,
}

impl InMemoryAdminStore {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn get(&self, id: Uuid) -> Option<AdminRecord> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    fn check_unique(
        rows: &HashMap<Uuid, AdminRecord>,
        record: &AdminRecord,
    ) -> Result<(), AccountRepositoryError> {
        for other in rows.values().filter(|other| other.id != record.id) {
            if other.username == record.username {
                return Err(duplicate_key("admins_username_key"));
            }
            if other.email == record.email {
                return Err(duplicate_key("admins_email_key"));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl AdminRepository for InMemoryAdminStore {
    async fn insert_admin(&self, record: AdminRecord) -> Result<AdminRecord, AccountRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&record.id) {
            return Err(duplicate_key("admins_pkey"));
        }
        Self::check_unique(&rows, &record)?;
        rows.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update_admin(&self, record: AdminRecord) -> Result<AdminRecord, AccountRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if !rows.contains_key(&record.id) {
            return Err(AccountRepositoryError::NotFound);
        }
        Self::check_unique(&rows, &record)?;
        rows.insert(record.id, record.clone());
        Ok(record)
    }
}

#[async_trait]
impl AdminQuery for InMemoryAdminStore {
    async fn find_by_id(&self, admin_id: Uuid) -> Result<Option<AdminRecord>, AccountRepositoryError> {
        Ok(self.get(admin_id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AdminRecord>, AccountRepositoryError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.values().find(|r| r.email == email).cloned())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminRecord>, AccountRepositoryError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.values().find(|r| r.username == username).cloned())
    }
}

/// User table stand-in; `email` and `mobile_number` are unique.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    rows: Arc<Mutex<HashMap<Uuid, UserRecord>>>,
}

impl InMemoryUserStore {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn get(&self, id: Uuid) -> Option<UserRecord> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    fn check_unique(
        rows: &HashMap<Uuid, UserRecord>,
        record: &UserRecord,
    ) -> Result<(), AccountRepositoryError> {
        for other in rows.values().filter(|other| other.id != record.id) {
            if other.email == record.email {
                return Err(duplicate_key("users_email_key"));
            }
            if other.mobile_number == record.mobile_number {
                return Err(duplicate_key("users_mobile_number_key"));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn insert_user(&self, record: UserRecord) -> Result<UserRecord, AccountRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&record.id) {
            return Err(duplicate_key("users_pkey"));
        }
        Self::check_unique(&rows, &record)?;
        rows.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update_user(&self, record: UserRecord) -> Result<UserRecord, AccountRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if !rows.contains_key(&record.id) {
            return Err(AccountRepositoryError::NotFound);
        }
        Self::check_unique(&rows, &record)?;
        rows.insert(record.id, record.clone());
        Ok(record)
    }
}

#[async_trait]
impl UserQuery for InMemoryUserStore {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserRecord>, AccountRepositoryError> {
        Ok(self.get(user_id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AccountRepositoryError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.values().find(|r| r.email == email).cloned())
    }

    async fn find_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> Result<Option<UserRecord>, AccountRepositoryError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.values().find(|r| r.mobile_number == mobile_number).cloned())
    }
}
