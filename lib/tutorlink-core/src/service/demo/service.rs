use shared_types::{EnquiryId, TutorId};
use time::{Date, OffsetDateTime, Time};

use super::DemoService;
use super::dto::{CreateDemoRequestDTO, DemoRequestResponseDTO, UserDecisionRequestDTO};
use super::validator::{throw_if_decision_not_available, throw_if_demo_exists};
use crate::common_mapper::ensure_success;
use crate::model::demo_request::{ApplicationDecisionEnum, DemoRequest};
use crate::service::error::ServiceError;

impl DemoService {
    pub async fn get_demo_requests(
        &self,
        enquiry_id: EnquiryId,
    ) -> Result<Vec<DemoRequest>, ServiceError> {
        let url = self.config.api.endpoint("/enquiry-demo-requests");
        let builder = self
            .session
            .authorize(self.client.get(&url))
            .await?
            .query([("enquiry", enquiry_id.to_string())])?;
        let response = ensure_success(builder.send().await?, &self.session).await?;

        let items: Vec<DemoRequestResponseDTO> = response.json()?;
        Ok(items.into_iter().map(DemoRequest::from).collect())
    }

    /// Whether a "Schedule Demo" action should be offered for this tutor:
    /// true only while no demo request exists for the pair.
    pub fn can_schedule_demo(existing: &[DemoRequest], tutor_id: TutorId) -> bool {
        !existing.iter().any(|demo| demo.tutor_id == tutor_id)
    }

    /// Creates exactly one demo request per (enquiry, tutor) pair; the
    /// current list is re-fetched to enforce the precondition.
    pub async fn schedule_demo(
        &self,
        enquiry_id: EnquiryId,
        tutor_id: TutorId,
        demo_date: Date,
        demo_time: Time,
        message: Option<String>,
    ) -> Result<DemoRequest, ServiceError> {
        let existing = self.get_demo_requests(enquiry_id).await?;
        throw_if_demo_exists(&existing, enquiry_id, tutor_id)?;

        let request = CreateDemoRequestDTO {
            enquiry_id,
            tutor_id,
            demo_date,
            demo_time,
            message: message.filter(|message| !message.trim().is_empty()),
        };
        let url = self.config.api.endpoint("/enquiry-demo-requests");
        let builder = self
            .session
            .authorize(self.client.post(&url))
            .await?
            .json(request)?;
        let response = ensure_success(builder.send().await?, &self.session).await?;

        let created: DemoRequestResponseDTO = response.json()?;
        tracing::debug!(demo_id = %created.id, %tutor_id, "demo scheduled");
        Ok(created.into())
    }

    /// Submit the requester's side of the two-sided acceptance. Guarded:
    /// only after the demo's scheduled time, never after finalization, and
    /// only while the user's decision is still pending.
    pub async fn submit_user_decision(
        &self,
        demo: &DemoRequest,
        decision: ApplicationDecisionEnum,
    ) -> Result<(), ServiceError> {
        throw_if_decision_not_available(demo, OffsetDateTime::now_utc())?;

        let url = self
            .config
            .api
            .endpoint(&format!("/enquiry-demo-requests/{}", demo.id));
        let builder = self
            .session
            .authorize(self.client.patch(&url))
            .await?
            .json(UserDecisionRequestDTO {
                user_application_accepted: decision,
            })?;
        ensure_success(builder.send().await?, &self.session).await?;
        Ok(())
    }
}
