use serde::{Deserialize, Serialize};
use shared_types::{BookingId, TutorId};
use time::{Date, OffsetDateTime, Time};

use crate::model::booking::BookingStatusEnum;
use crate::model::common::{hhmm, ymd};

/// Client-local form for booking a demo directly against a tutor profile.
#[derive(Clone, Debug, Default)]
pub struct BookDemoFormDTO {
    pub contact_name: String,
    pub contact_email: String,
    pub contact_mobile: String,
    pub demo_date: String,
    pub demo_time: String,
    pub message: String,
    pub address: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct BookDemoRequestDTO {
    pub tutor_id: TutorId,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_mobile: String,
    #[serde(with = "ymd")]
    pub demo_date: Date,
    #[serde(with = "hhmm")]
    pub demo_time: Time,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct BookingResponseDTO {
    pub id: BookingId,
    pub tutor_id: TutorId,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_mobile: String,
    #[serde(with = "ymd")]
    pub demo_date: Date,
    #[serde(with = "hhmm")]
    pub demo_time: Time,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub status: BookingStatusEnum,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
}
