use serde::{Deserialize, Serialize};
use shared_types::{BookingId, TutorId};
use strum::{Display, EnumString};
use time::{Date, OffsetDateTime, Time};

/// A direct demo booking against a tutor, outside the enquiry flow.
/// Confirmed or declined unilaterally by the tutor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Booking {
    pub id: BookingId,
    pub tutor_id: TutorId,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_mobile: String,
    pub demo_date: Date,
    pub demo_time: Time,
    pub message: Option<String>,
    pub address: Option<String>,
    pub status: BookingStatusEnum,
    pub created_date: OffsetDateTime,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BookingStatusEnum {
    #[default]
    Pending,
    Accepted,
    Rejected,
}
