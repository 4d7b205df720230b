use serde::Deserialize;
use shared_types::TutorId;
use time::OffsetDateTime;

use crate::model::round::TutorActionEnum;

/// One tutor candidate as returned by the sent-tutors endpoint. Newer
/// backend revisions send an explicit `round_number`; older ones only the
/// batch creation timestamp.
#[derive(Clone, Debug, Deserialize)]
pub struct SentTutorResponseDTO {
    pub tutor_id: TutorId,
    #[serde(default)]
    pub tutor_name: String,
    #[serde(default)]
    pub action: TutorActionEnum,
    #[serde(default)]
    pub round_number: Option<u32>,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
}
