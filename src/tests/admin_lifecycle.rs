use std::sync::Arc;

use chrono::Duration;

use crate::admin::application::domain::{AdminRole, NewAdmin};
use crate::admin::application::services::AdminAccountService;
use crate::admin::application::use_cases::AdminAccountsUseCase;
use crate::config::AccountsConfig;
use crate::credentials::application::services::CredentialLifecycle;
use crate::shared::SaveAccountError;
use crate::tests::support::{init_test_tracing, InMemoryAdminStore, ManualClock, PrefixHasher};

fn bcrypt_service(
    store: &InMemoryAdminStore,
    clock: Arc<ManualClock>,
) -> AdminAccountService<InMemoryAdminStore, InMemoryAdminStore> {
    let hasher = AccountsConfig::default().build_hasher();
    AdminAccountService::new(
        store.clone(),
        store.clone(),
        CredentialLifecycle::new(hasher, clock),
    )
}

fn new_admin(username: &str, email: &str) -> NewAdmin {
    NewAdmin {
        username: username.to_string(),
        email: email.to_string(),
        password: "SecurePassword123".to_string(),
        role: None,
    }
}

#[tokio::test]
async fn test_registered_admin_stores_bcrypt_hash_only() {
    init_test_tracing();
    let store = InMemoryAdminStore::default();
    let service = bcrypt_service(&store, Arc::new(ManualClock::default()));

    let account = service
        .register(new_admin("rootadmin", "root@example.com"))
        .await
        .unwrap();

    let row = store.get(account.id()).expect("row written");
    assert_ne!(row.password_hash, "SecurePassword123");
    assert!(row.password_hash.starts_with("$2"));
    assert_eq!(&row.password_hash[4..6], "10");

    assert_eq!(service.verify_password(&account, "SecurePassword123").await, Ok(true));
    assert_eq!(service.verify_password(&account, "WrongPassword99").await, Ok(false));
}

#[tokio::test]
async fn test_unchanged_secret_keeps_hash_across_saves() {
    init_test_tracing();
    let store = InMemoryAdminStore::default();
    let clock = Arc::new(ManualClock::default());
    let service = bcrypt_service(&store, clock.clone());

    let mut account = service
        .register(new_admin("rootadmin", "root@example.com"))
        .await
        .unwrap();
    let first_hash = store.get(account.id()).unwrap().password_hash;

    account.set_email("  Ops@Example.COM ").unwrap();
    clock.advance(Duration::minutes(10));
    service.save(&mut account).await.unwrap();

    let row = store.get(account.id()).unwrap();
    assert_eq!(row.password_hash, first_hash);
    assert_eq!(row.email, "ops@example.com");
    assert!(row.updated_at >= row.created_at);
    assert_eq!(row.updated_at - row.created_at, Duration::minutes(10));
}

#[tokio::test]
async fn test_changed_secret_replaces_hash() {
    init_test_tracing();
    let store = InMemoryAdminStore::default();
    let service = bcrypt_service(&store, Arc::new(ManualClock::default()));

    let mut account = service
        .register(new_admin("rootadmin", "root@example.com"))
        .await
        .unwrap();
    let first_hash = store.get(account.id()).unwrap().password_hash;

    account.set_password("AnotherSecret456").unwrap();
    service.save(&mut account).await.unwrap();

    let reloaded = service.find_by_id(account.id()).await.unwrap().unwrap();
    assert_ne!(reloaded.credential().password_hash().unwrap().as_str(), first_hash);
    assert_eq!(service.verify_password(&reloaded, "AnotherSecret456").await, Ok(true));
    assert_eq!(service.verify_password(&reloaded, "SecurePassword123").await, Ok(false));
}

#[tokio::test]
async fn test_updated_at_never_moves_backwards() {
    init_test_tracing();
    let store = InMemoryAdminStore::default();
    let clock = Arc::new(ManualClock::default());
    let service = AdminAccountService::new(
        store.clone(),
        store.clone(),
        CredentialLifecycle::new(Arc::new(PrefixHasher), clock.clone()),
    );

    let mut account = service
        .register(new_admin("rootadmin", "root@example.com"))
        .await
        .unwrap();
    let saved_at = account.updated_at();

    // a clock that steps back must not drag updated_at with it
    clock.advance(Duration::minutes(-30));
    account.set_role(AdminRole::SuperAdmin);
    service.save(&mut account).await.unwrap();

    assert_eq!(account.updated_at(), saved_at);
    assert!(account.updated_at() >= account.created_at());
}

#[tokio::test]
async fn test_duplicate_username_and_email_are_rejected_by_storage() {
    init_test_tracing();
    let store = InMemoryAdminStore::default();
    let service = AdminAccountService::new(
        store.clone(),
        store.clone(),
        CredentialLifecycle::new(Arc::new(PrefixHasher), Arc::new(ManualClock::default())),
    );

    service
        .register(new_admin("rootadmin", "root@example.com"))
        .await
        .unwrap();

    let same_username = service
        .register(new_admin("rootadmin", "other@example.com"))
        .await
        .unwrap_err();
    let same_email = service
        .register(new_admin("otheradmin", "ROOT@example.com"))
        .await
        .unwrap_err();

    assert!(matches!(same_username, SaveAccountError::ConstraintViolation(_)));
    assert!(same_email.to_string().contains("admins_email_key"));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_role_defaults_and_lookup_by_username() {
    init_test_tracing();
    let store = InMemoryAdminStore::default();
    let service = AdminAccountService::new(
        store.clone(),
        store.clone(),
        CredentialLifecycle::new(Arc::new(PrefixHasher), Arc::new(ManualClock::default())),
    );

    let created = service
        .register(new_admin("  rootadmin  ", "  Root@Example.COM "))
        .await
        .unwrap();

    let found = service
        .find_by_username("rootadmin")
        .await
        .unwrap()
        .expect("admin should be found");

    assert_eq!(found.id(), created.id());
    assert_eq!(found.role(), AdminRole::Admin);
    assert_eq!(found.email().as_str(), "root@example.com");
}
