use std::sync::Arc;

use mockall::predicate::eq;

use super::{SessionService, TokenPair};
use crate::model::user::User;
use crate::provider::device_storage::in_memory::InMemoryStorage;
use crate::provider::device_storage::{MockDeviceStorage, StorageError};
use crate::store::UserCache;

fn generic_user() -> User {
    User {
        id: 7.into(),
        username: "nikhh".to_string(),
        email: "a@b.com".to_string(),
        mobile_number: "9876543210".to_string(),
        date_of_birth: None,
        student_class: None,
        home_address: None,
    }
}

fn tokens() -> TokenPair {
    TokenPair {
        access: "access-123".to_string(),
        refresh: "refresh-456".to_string(),
    }
}

#[tokio::test]
async fn test_store_session_persists_tokens_and_mirrors_user() {
    let service = SessionService::new(
        Arc::new(InMemoryStorage::new()),
        Arc::new(UserCache::new()),
    );

    service.store_session(&tokens(), &generic_user()).await.unwrap();

    assert_eq!(
        service.access_token().await.unwrap().as_deref(),
        Some("access-123")
    );
    // synchronous read served from the mirror
    assert_eq!(service.cached_user().unwrap().username, "nikhh");
}

#[tokio::test]
async fn test_current_user_falls_back_to_storage_and_warms_cache() {
    let storage = Arc::new(InMemoryStorage::new());
    let service = SessionService::new(storage.clone(), Arc::new(UserCache::new()));
    service.store_session(&tokens(), &generic_user()).await.unwrap();

    // fresh cache, same storage: simulates an app restart
    let restarted = SessionService::new(storage, Arc::new(UserCache::new()));
    assert!(restarted.cached_user().is_none());

    let user = restarted.current_user().await.unwrap().unwrap();
    assert_eq!(user, generic_user());
    assert!(restarted.cached_user().is_some());
}

#[tokio::test]
async fn test_clear_wipes_storage_and_cache() {
    let service = SessionService::new(
        Arc::new(InMemoryStorage::new()),
        Arc::new(UserCache::new()),
    );
    service.store_session(&tokens(), &generic_user()).await.unwrap();

    service.clear().await.unwrap();

    assert_eq!(service.access_token().await.unwrap(), None);
    assert!(service.cached_user().is_none());
    assert_eq!(service.current_user().await.unwrap(), None);
}

#[tokio::test]
async fn test_cached_user_is_served_without_storage_reads() {
    let mut storage = MockDeviceStorage::new();
    storage
        .expect_get()
        .with(eq("user"))
        .times(0)
        .returning(|_| Err(StorageError::Backend(anyhow::anyhow!("not expected"))));

    let cache = Arc::new(UserCache::new());
    cache.set(generic_user());
    let service = SessionService::new(Arc::new(storage), cache);

    let user = service.current_user().await.unwrap().unwrap();
    assert_eq!(user.username, "nikhh");
}
