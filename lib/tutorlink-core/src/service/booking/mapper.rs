use shared_types::TutorId;

use super::dto::{BookDemoFormDTO, BookDemoRequestDTO, BookingResponseDTO};
use crate::model::booking::Booking;
use crate::service::error::ServiceError;
use crate::validator::field::{validate_demo_date, validate_time_hhmm};

fn optional(value: &str) -> Option<String> {
    match value.trim() {
        "" => None,
        value => Some(value.to_string()),
    }
}

/// Build the wire payload from a form that already passed validation; a
/// parse failure here means the form was mapped without validating.
pub(crate) fn book_request_from_form(
    form: &BookDemoFormDTO,
    tutor_id: TutorId,
) -> Result<BookDemoRequestDTO, ServiceError> {
    let map_field = |error: crate::validator::FieldError| ServiceError::MappingError(error.to_string());

    Ok(BookDemoRequestDTO {
        tutor_id,
        contact_name: form.contact_name.trim().to_string(),
        contact_email: form.contact_email.trim().to_string(),
        contact_mobile: form.contact_mobile.trim().to_string(),
        demo_date: validate_demo_date(&form.demo_date).map_err(map_field)?,
        demo_time: validate_time_hhmm(&form.demo_time).map_err(map_field)?,
        message: optional(&form.message),
        address: optional(&form.address),
    })
}

impl From<BookingResponseDTO> for Booking {
    fn from(value: BookingResponseDTO) -> Self {
        Self {
            id: value.id,
            tutor_id: value.tutor_id,
            contact_name: value.contact_name,
            contact_email: value.contact_email,
            contact_mobile: value.contact_mobile,
            demo_date: value.demo_date,
            demo_time: value.demo_time,
            message: value.message,
            address: value.address,
            status: value.status,
            created_date: value.created,
        }
    }
}
