use std::sync::RwLock;

use crate::model::user::User;

/// In-memory mirror of the persisted current user, readable without
/// touching device storage.
#[derive(Debug, Default)]
pub struct UserCache {
    inner: RwLock<Option<User>>,
}

impl UserCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<User> {
        self.inner.read().ok().and_then(|user| user.clone())
    }

    pub fn set(&self, user: User) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = Some(user);
        }
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = None;
        }
    }
}
