pub mod service;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::provider::device_storage::DeviceStorage;
use crate::store::UserCache;

pub(crate) const ACCESS_TOKEN_KEY: &str = "token";
pub(crate) const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub(crate) const CURRENT_USER_KEY: &str = "user";

/// Token pair issued at login and persisted in device storage.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Owns the persisted session (token pair + serialized current user) and
/// the synchronous in-memory mirror of the user.
#[derive(Clone)]
pub struct SessionService {
    storage: Arc<dyn DeviceStorage>,
    user_cache: Arc<UserCache>,
}

impl SessionService {
    pub(crate) fn new(storage: Arc<dyn DeviceStorage>, user_cache: Arc<UserCache>) -> Self {
        Self {
            storage,
            user_cache,
        }
    }
}

#[cfg(test)]
mod test;
