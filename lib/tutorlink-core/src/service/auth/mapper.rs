use time::Date;

use super::dto::{
    AddressPayloadDTO, AvailabilitySlotDTO, RegisterStudentRequestDTO, RegisterTutorRequestDTO,
    StudentRegistrationFormDTO, TutorRegistrationFormDTO,
};
use crate::model::common::AvailabilitySlot;
use crate::service::error::ServiceError;
use crate::validator::field::{validate_date_of_birth, validate_experience, validate_price};

/// Build the wire payload from a form that already passed validation; a
/// parse failure here means the form was mapped without validating.
pub(crate) fn student_request_from_form(
    form: &StudentRegistrationFormDTO,
    today: Date,
) -> Result<RegisterStudentRequestDTO, ServiceError> {
    let date_of_birth = validate_date_of_birth(&form.date_of_birth, today)
        .map_err(|error| ServiceError::MappingError(error.to_string()))?;

    Ok(RegisterStudentRequestDTO {
        username: form.username.trim().to_string(),
        email: form.email.trim().to_string(),
        mobile_number: form.mobile_number.trim().to_string(),
        date_of_birth,
        student_class: form.student_class.trim().to_string(),
        password: form.password.clone(),
        confirm_password: form.confirm_password.clone(),
        address: AddressPayloadDTO {
            street: form.address.street.trim().to_string(),
            city: form.address.city.trim().to_string(),
            state: form.address.state.trim().to_string(),
            pin_code: form.address.pin_code.trim().to_string(),
            country: form.address.country.trim().to_string(),
        },
    })
}

pub(crate) fn tutor_request_from_form(
    form: &TutorRegistrationFormDTO,
) -> Result<RegisterTutorRequestDTO, ServiceError> {
    let price = validate_price(&form.price)
        .map_err(|error| ServiceError::MappingError(error.to_string()))?;
    let experience = validate_experience(&form.experience)
        .map_err(|error| ServiceError::MappingError(error.to_string()))?;

    let certificates = match form.certificates.trim() {
        "" => None,
        value => Some(value.to_string()),
    };

    Ok(RegisterTutorRequestDTO {
        username: form.username.trim().to_string(),
        email: form.email.trim().to_string(),
        password: form.password.clone(),
        confirm_password: form.confirm_password.clone(),
        mobile_number: form.mobile_number.trim().to_string(),
        street: form.street.trim().to_string(),
        city: form.city.trim().to_string(),
        state: form.state.trim().to_string(),
        pin_code: form.pin_code.trim().to_string(),
        country: form.country.trim().to_string(),
        board: form.boards.clone(),
        classes: form.classes.clone(),
        subjects: form.subjects.clone(),
        education_qualification: form.education_qualification.trim().to_string(),
        certificates,
        price,
        experience,
        about: form.about.trim().to_string(),
        gender: form.gender.trim().to_lowercase(),
        language: form.language.trim().to_string(),
        availabilities: form.availabilities.iter().map(Into::into).collect(),
    })
}

impl From<&AvailabilitySlot> for AvailabilitySlotDTO {
    fn from(slot: &AvailabilitySlot) -> Self {
        Self {
            section: slot.section,
            start_time: slot.window.start,
            end_time: slot.window.end,
        }
    }
}
