use serde::{Deserialize, Serialize};
use shared_types::{DemoRequestId, EnquiryId, TutorId};
use time::{Date, OffsetDateTime, Time};

use crate::model::common::{hhmm, ymd};
use crate::model::demo_request::ApplicationDecisionEnum;

#[derive(Clone, Debug, Deserialize)]
pub struct DemoRequestResponseDTO {
    pub id: DemoRequestId,
    pub enquiry_id: EnquiryId,
    pub tutor_id: TutorId,
    #[serde(with = "ymd")]
    pub demo_date: Date,
    #[serde(with = "hhmm")]
    pub demo_time: Time,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user_application_accepted: ApplicationDecisionEnum,
    #[serde(default)]
    pub tutor_application_accepted: ApplicationDecisionEnum,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
}

#[derive(Clone, Debug, Serialize)]
pub struct CreateDemoRequestDTO {
    pub enquiry_id: EnquiryId,
    pub tutor_id: TutorId,
    #[serde(with = "ymd")]
    pub demo_date: Date,
    #[serde(with = "hhmm")]
    pub demo_time: Time,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct UserDecisionRequestDTO {
    pub user_application_accepted: ApplicationDecisionEnum,
}
