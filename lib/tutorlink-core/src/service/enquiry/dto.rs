use serde::{Deserialize, Serialize};
use shared_types::{EnquiryId, UserId};
use time::{OffsetDateTime, Time};

use crate::model::common::{Section, hhmm};
use crate::model::enquiry::EnquiryStatusEnum;

/// Client-local wizard state for the offline booking flow. Raw strings as
/// entered; parsing happens in validation/mapping.
#[derive(Clone, Debug, Default)]
pub struct OfflineEnquiryFormDTO {
    pub username: String,
    pub email: String,
    pub mobile_number: String,
    pub home_address: String,
    pub boards: Vec<String>,
    pub classes: Vec<String>,
    pub subjects: Vec<String>,
    pub teaching_language: String,
    pub teaching_section: String,
    pub teaching_starttime: String,
    pub teaching_endtime: String,
    pub minimum_price: String,
    pub maximum_price: String,
    pub message: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct CreateEnquiryRequestDTO {
    pub username: String,
    pub email: String,
    pub mobile_number: String,
    pub home_address: String,
    pub board: Vec<String>,
    pub classes: Vec<String>,
    pub subjects: Vec<String>,
    pub teaching_language: String,
    pub teaching_section: Section,
    #[serde(with = "hhmm")]
    pub teaching_starttime: Time,
    #[serde(with = "hhmm")]
    pub teaching_endtime: Time,
    pub minimum_price: u32,
    pub maximum_price: u32,
    pub message: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CreateEnquiryResponseDTO {
    pub id: EnquiryId,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EnquiryResponseDTO {
    pub id: EnquiryId,
    pub user: UserId,
    #[serde(default)]
    pub user_username: String,
    pub email: String,
    pub mobile_number: String,
    pub home_address: String,
    pub board: Vec<String>,
    pub classes: Vec<String>,
    pub subjects: Vec<String>,
    pub teaching_language: String,
    pub teaching_section: Section,
    #[serde(with = "hhmm")]
    pub teaching_starttime: Time,
    #[serde(with = "hhmm")]
    pub teaching_endtime: Time,
    pub minimum_price: u32,
    pub maximum_price: u32,
    #[serde(default)]
    pub message: String,
    pub status: EnquiryStatusEnum,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_modified: Option<OffsetDateTime>,
}

/// One history entry from the status-flow endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct EnquiryFlowItemDTO {
    pub id: i64,
    pub status: EnquiryStatusEnum,
    #[serde(default)]
    pub status_label: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimelineStepState {
    Completed,
    Active,
    Upcoming,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimelineStepDTO {
    pub status: EnquiryStatusEnum,
    pub state: TimelineStepState,
}

/// View model for the status timeline: the five forward steps, with
/// cancellation as an overlay rather than a sixth step.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnquiryTimelineDTO {
    pub steps: Vec<TimelineStepDTO>,
    pub cancelled: bool,
}
