use shared_types::TutorId;

use super::BookingService;
use super::dto::{BookDemoFormDTO, BookingResponseDTO};
use super::mapper::book_request_from_form;
use super::validator::validate_book_demo;
use crate::common_mapper::ensure_success;
use crate::model::booking::{Booking, BookingStatusEnum};
use crate::service::error::{ServiceError, ValidationError};

impl BookingService {
    /// Book a trial session directly against a tutor profile.
    pub async fn book_demo(
        &self,
        tutor_id: TutorId,
        form: &BookDemoFormDTO,
    ) -> Result<Booking, ServiceError> {
        let errors = validate_book_demo(form);
        if !errors.is_empty() {
            return Err(ValidationError::Fields(errors).into());
        }

        let request = book_request_from_form(form, tutor_id)?;
        let url = self.config.api.endpoint("/demoapp");
        let builder = self
            .session
            .authorize(self.client.post(&url))
            .await?
            .json(request)?;
        let response = ensure_success(builder.send().await?, &self.session).await?;

        let created: BookingResponseDTO = response.json()?;
        Ok(created.into())
    }

    /// The user's demo bookings, optionally filtered by tutor decision.
    pub async fn get_bookings(
        &self,
        status: Option<BookingStatusEnum>,
    ) -> Result<Vec<Booking>, ServiceError> {
        let url = self.config.api.endpoint("/demoapp");
        let mut builder = self.session.authorize(self.client.get(&url)).await?;
        if let Some(status) = status {
            builder = builder.query([("status", status.to_string())])?;
        }
        let response = ensure_success(builder.send().await?, &self.session).await?;

        let items: Vec<BookingResponseDTO> = response.json()?;
        Ok(items.into_iter().map(Booking::from).collect())
    }
}
