use shared_types::EnquiryId;

use super::TutorRoundService;
use super::aggregator::group_into_rounds;
use super::dto::SentTutorResponseDTO;
use crate::common_mapper::ensure_success;
use crate::model::round::Round;
use crate::service::error::ServiceError;

impl TutorRoundService {
    /// Fetch the tutors sent against an enquiry, grouped into rounds in
    /// chronological order.
    pub async fn get_rounds(&self, enquiry_id: EnquiryId) -> Result<Vec<Round>, ServiceError> {
        let url = self.config.api.endpoint("/send-tutors");
        let builder = self
            .session
            .authorize(self.client.get(&url))
            .await?
            .query([("enquiry", enquiry_id.to_string())])?;
        let response = ensure_success(builder.send().await?, &self.session).await?;

        let entries: Vec<SentTutorResponseDTO> = response.json()?;
        Ok(group_into_rounds(&entries))
    }
}
