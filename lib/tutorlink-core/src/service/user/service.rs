use shared_types::{AddressId, UserId};
use time::OffsetDateTime;

use super::UserService;
use super::dto::{UpdateAddressRequestDTO, UpdateUserRequestDTO};
use super::validator::{validate_address_update, validate_profile_update};
use crate::common_mapper::ensure_success;
use crate::model::user::{Address, User};
use crate::service::error::{EntityNotFoundError, ServiceError, ValidationError};

impl UserService {
    /// The stored address id the profile screen patches against.
    pub async fn current_address_id(&self) -> Result<AddressId, ServiceError> {
        let Some(user) = self.session.current_user().await? else {
            return Err(ServiceError::Unauthorized);
        };
        let user_id = user.id;
        user.home_address
            .map(|address| address.id)
            .ok_or_else(|| EntityNotFoundError::UserAddress(user_id).into())
    }

    /// Patch the profile, refresh the cached user, and notify dependent
    /// screens.
    pub async fn update_profile(
        &self,
        user_id: UserId,
        request: UpdateUserRequestDTO,
    ) -> Result<User, ServiceError> {
        let errors = validate_profile_update(&request, OffsetDateTime::now_utc().date());
        if !errors.is_empty() {
            return Err(ValidationError::Fields(errors).into());
        }

        let url = self.config.api.endpoint(&format!("/users/{user_id}"));
        let builder = self
            .session
            .authorize(self.client.patch(&url))
            .await?
            .json(request)?;
        let response = ensure_success(builder.send().await?, &self.session).await?;

        let user: User = response.json()?;
        self.session.persist_user(&user).await?;
        self.refresh_signal.trigger();
        Ok(user)
    }

    /// Patch the home address; the cached user's address follows suit.
    pub async fn update_address(
        &self,
        address_id: AddressId,
        request: UpdateAddressRequestDTO,
    ) -> Result<Address, ServiceError> {
        let errors = validate_address_update(&request);
        if !errors.is_empty() {
            return Err(ValidationError::Fields(errors).into());
        }

        let url = self
            .config
            .api
            .endpoint(&format!("/addresses/{address_id}"));
        let builder = self
            .session
            .authorize(self.client.patch(&url))
            .await?
            .json(request)?;
        let response = ensure_success(builder.send().await?, &self.session).await?;

        let address: Address = response.json()?;
        if let Some(mut user) = self.session.current_user().await? {
            user.home_address = Some(address.clone());
            self.session.persist_user(&user).await?;
        }
        self.refresh_signal.trigger();
        Ok(address)
    }
}
