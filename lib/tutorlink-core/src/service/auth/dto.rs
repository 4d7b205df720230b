use serde::{Deserialize, Serialize};
use time::{Date, Time};

use crate::model::common::{AvailabilitySlot, Section, hhmm, ymd};
use crate::model::user::User;
use crate::service::session::TokenPair;

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequestDTO {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponseDTO {
    #[serde(default)]
    pub ok: bool,
    pub tokens: TokenPair,
    pub user: User,
}

/// Client-local wizard state for student registration. Raw strings as
/// entered; parsing happens in validation/mapping.
#[derive(Clone, Debug, Default)]
pub struct StudentRegistrationFormDTO {
    pub username: String,
    pub email: String,
    pub mobile_number: String,
    pub password: String,
    pub confirm_password: String,
    pub date_of_birth: String,
    pub student_class: String,
    pub address: AddressFormDTO,
}

#[derive(Clone, Debug, Default)]
pub struct AddressFormDTO {
    pub street: String,
    pub city: String,
    pub state: String,
    pub pin_code: String,
    pub country: String,
}

#[derive(Clone, Debug, Default)]
pub struct TutorRegistrationFormDTO {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub mobile_number: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub pin_code: String,
    pub country: String,
    pub boards: Vec<String>,
    pub classes: Vec<String>,
    pub subjects: Vec<String>,
    pub education_qualification: String,
    pub certificates: String,
    pub price: String,
    pub experience: String,
    pub about: String,
    pub gender: String,
    pub language: String,
    pub availabilities: Vec<AvailabilitySlot>,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterStudentRequestDTO {
    pub username: String,
    pub email: String,
    pub mobile_number: String,
    #[serde(with = "ymd")]
    pub date_of_birth: Date,
    pub student_class: String,
    pub password: String,
    pub confirm_password: String,
    pub address: AddressPayloadDTO,
}

#[derive(Clone, Debug, Serialize)]
pub struct AddressPayloadDTO {
    pub street: String,
    pub city: String,
    pub state: String,
    pub pin_code: String,
    pub country: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterTutorRequestDTO {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub mobile_number: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub pin_code: String,
    pub country: String,
    pub board: Vec<String>,
    pub classes: Vec<String>,
    pub subjects: Vec<String>,
    pub education_qualification: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificates: Option<String>,
    pub price: u32,
    pub experience: u32,
    pub about: String,
    pub gender: String,
    pub language: String,
    pub availabilities: Vec<AvailabilitySlotDTO>,
}

#[derive(Clone, Debug, Serialize)]
pub struct AvailabilitySlotDTO {
    pub section: Section,
    #[serde(with = "hhmm")]
    pub start_time: Time,
    #[serde(with = "hhmm")]
    pub end_time: Time,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RegisterResponseDTO {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user: Option<User>,
}
