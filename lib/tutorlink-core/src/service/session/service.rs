use super::{ACCESS_TOKEN_KEY, CURRENT_USER_KEY, REFRESH_TOKEN_KEY, SessionService, TokenPair};
use crate::model::user::User;
use crate::provider::http_client::RequestBuilder;
use crate::service::error::ServiceError;

impl SessionService {
    /// Persist a fresh login: both tokens plus the serialized user, and
    /// mirror the user into the in-memory cache.
    pub async fn store_session(
        &self,
        tokens: &TokenPair,
        user: &User,
    ) -> Result<(), ServiceError> {
        self.storage.set(ACCESS_TOKEN_KEY, &tokens.access).await?;
        self.storage.set(REFRESH_TOKEN_KEY, &tokens.refresh).await?;
        self.persist_user(user).await?;
        Ok(())
    }

    pub async fn access_token(&self) -> Result<Option<String>, ServiceError> {
        Ok(self.storage.get(ACCESS_TOKEN_KEY).await?)
    }

    /// Attach the stored bearer token, if any. Requests without a token go
    /// out unauthenticated and earn their 401 from the backend.
    pub(crate) async fn authorize(
        &self,
        builder: RequestBuilder,
    ) -> Result<RequestBuilder, ServiceError> {
        Ok(match self.access_token().await? {
            Some(token) => builder.bearer_auth(&token),
            None => builder,
        })
    }

    /// Synchronous read of the cached user; never touches storage.
    pub fn cached_user(&self) -> Option<User> {
        self.user_cache.get()
    }

    /// Cache first, storage fallback. A storage hit warms the cache.
    pub async fn current_user(&self) -> Result<Option<User>, ServiceError> {
        if let Some(user) = self.user_cache.get() {
            return Ok(Some(user));
        }

        let Some(raw) = self.storage.get(CURRENT_USER_KEY).await? else {
            return Ok(None);
        };
        let user: User = serde_json::from_str(&raw)
            .map_err(|error| ServiceError::MappingError(error.to_string()))?;
        self.user_cache.set(user.clone());
        Ok(Some(user))
    }

    /// Re-persist an updated user (profile edits) and refresh the mirror.
    pub async fn persist_user(&self, user: &User) -> Result<(), ServiceError> {
        let serialized = serde_json::to_string(user)
            .map_err(|error| ServiceError::MappingError(error.to_string()))?;
        self.storage.set(CURRENT_USER_KEY, &serialized).await?;
        self.user_cache.set(user.clone());
        Ok(())
    }

    pub async fn clear(&self) -> Result<(), ServiceError> {
        self.storage.clear().await?;
        self.user_cache.clear();
        Ok(())
    }

    /// Forced logout on authentication expiry. Clearing is best-effort;
    /// the caller always gets [`ServiceError::Unauthorized`] back.
    pub(crate) async fn expire(&self) -> ServiceError {
        tracing::warn!("session expired, clearing local credentials");
        if let Err(error) = self.clear().await {
            tracing::error!(%error, "failed to clear expired session");
        }
        ServiceError::Unauthorized
    }
}
