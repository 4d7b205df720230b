use serde_json::json;
use shared_types::EnquiryId;

use super::EnquiryService;
use super::dto::{
    CreateEnquiryResponseDTO, EnquiryFlowItemDTO, EnquiryResponseDTO, EnquiryTimelineDTO,
    OfflineEnquiryFormDTO,
};
use super::mapper::{create_request_from_form, timeline_from_flow};
use super::validator::{
    OFFLINE_ENQUIRY_STEPS, offline_enquiry_step_validator, validate_offline_enquiry,
};
use crate::common_mapper::ensure_success;
use crate::common_validator::throw_if_enquiry_terminal;
use crate::model::enquiry::{Enquiry, EnquiryStatusEnum};
use crate::service::error::{BusinessLogicError, ServiceError, ValidationError};
use crate::validator::FieldErrors;
use crate::wizard::Wizard;

impl EnquiryService {
    /// Fresh three-step booking wizard under the configured validation
    /// policy.
    pub fn booking_wizard(&self) -> Wizard<OfflineEnquiryFormDTO> {
        Wizard::new(
            OFFLINE_ENQUIRY_STEPS,
            self.config.validation.wizard_policy,
            OfflineEnquiryFormDTO::default(),
        )
    }

    /// The per-step validator backing [`Self::booking_wizard`].
    pub fn validate_booking_step(step: usize, form: &OfflineEnquiryFormDTO) -> FieldErrors {
        offline_enquiry_step_validator(step, form)
    }

    /// Creates an enquiry from the completed booking wizard form and
    /// notifies dependent screens.
    pub async fn create_enquiry(
        &self,
        form: &OfflineEnquiryFormDTO,
    ) -> Result<EnquiryId, ServiceError> {
        let errors = validate_offline_enquiry(form);
        if !errors.is_empty() {
            return Err(ValidationError::Fields(errors).into());
        }

        let request = create_request_from_form(form)?;
        let url = self.config.api.endpoint("/enquiry");
        let builder = self
            .session
            .authorize(self.client.post(&url))
            .await?
            .json(request)?;
        let response = ensure_success(builder.send().await?, &self.session).await?;

        let created: CreateEnquiryResponseDTO = response.json()?;
        self.refresh_signal.trigger();
        tracing::debug!(enquiry_id = %created.id, "enquiry created");
        Ok(created.id)
    }

    /// The requester's enquiries, newest state included.
    pub async fn get_my_enquiries(&self) -> Result<Vec<Enquiry>, ServiceError> {
        let url = self.config.api.endpoint("/enquiry/myapplications");
        let builder = self.session.authorize(self.client.get(&url)).await?;
        let response = ensure_success(builder.send().await?, &self.session).await?;

        let items: Vec<EnquiryResponseDTO> = response.json()?;
        Ok(items.into_iter().map(Enquiry::from).collect())
    }

    /// The status timeline for one enquiry, computed from the fetched
    /// status-flow history. Pure observation; nothing is mutated.
    pub async fn get_status_timeline(
        &self,
        enquiry_id: EnquiryId,
    ) -> Result<EnquiryTimelineDTO, ServiceError> {
        let url = self.config.api.endpoint("/enquiry-flow");
        let builder = self
            .session
            .authorize(self.client.get(&url))
            .await?
            .query([("enquiry", enquiry_id.to_string())])?;
        let response = ensure_success(builder.send().await?, &self.session).await?;

        let items: Vec<EnquiryFlowItemDTO> = response.json()?;
        Ok(timeline_from_flow(&items))
    }

    /// Prefill the booking form's contact step from the cached current
    /// user; untouched when nobody is signed in.
    pub async fn prefill_from_current_user(
        &self,
        form: &mut OfflineEnquiryFormDTO,
    ) -> Result<(), ServiceError> {
        let Some(user) = self.session.current_user().await? else {
            return Ok(());
        };

        form.username = user.username;
        form.email = user.email;
        form.mobile_number = user.mobile_number;
        if let Some(address) = user.home_address {
            form.home_address = address
                .formatted_address
                .unwrap_or_else(|| format!("{}, {}", address.street, address.city));
        }
        Ok(())
    }

    /// The one client-initiated transition. Requires an explicit user
    /// confirmation and an enquiry that is still open.
    pub async fn cancel_enquiry(
        &self,
        enquiry: &Enquiry,
        confirmed: bool,
    ) -> Result<(), ServiceError> {
        if !confirmed {
            return Err(BusinessLogicError::CancellationNotConfirmed.into());
        }
        throw_if_enquiry_terminal(enquiry)?;

        let url = self
            .config
            .api
            .endpoint(&format!("/enquiry/{}", enquiry.id));
        let builder = self
            .session
            .authorize(self.client.patch(&url))
            .await?
            .json(json!({"status": EnquiryStatusEnum::Cancelled}))?;
        ensure_success(builder.send().await?, &self.session).await?;

        self.refresh_signal.trigger();
        Ok(())
    }
}
