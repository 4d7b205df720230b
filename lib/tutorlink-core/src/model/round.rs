use serde::{Deserialize, Serialize};
use shared_types::TutorId;
use strum::Display;
use time::OffsetDateTime;

/// One batch of tutor candidates offered against an enquiry.
///
/// The backend creates round N+1 only after round N settled; the client
/// observes rounds, it never creates them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Round {
    /// 1-based, strictly increasing in chronological order.
    pub round_number: u32,
    pub created_date: OffsetDateTime,
    pub tutors: Vec<TutorCandidate>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TutorCandidate {
    pub tutor_id: TutorId,
    pub tutor_name: String,
    pub action: TutorActionEnum,
    /// Client-local flag for batch actions. Never set on accepted entries.
    pub selected: bool,
    pub created_date: OffsetDateTime,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TutorActionEnum {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl Round {
    pub fn candidate(&self, tutor_id: TutorId) -> Option<&TutorCandidate> {
        self.tutors.iter().find(|tutor| tutor.tutor_id == tutor_id)
    }

    pub(crate) fn candidate_mut(&mut self, tutor_id: TutorId) -> Option<&mut TutorCandidate> {
        self.tutors
            .iter_mut()
            .find(|tutor| tutor.tutor_id == tutor_id)
    }

    /// True when every candidate is either selected or already accepted.
    /// Drives the select-all control's aggregate state.
    pub fn all_selected_or_accepted(&self) -> bool {
        self.tutors
            .iter()
            .all(|tutor| tutor.selected || tutor.action == TutorActionEnum::Accepted)
    }

    /// Display hint only: an accepted candidate means the backend will have
    /// opened the next round. The server remains the authority on whether a
    /// next round actually exists.
    pub fn has_triggered_next_round(&self) -> bool {
        self.tutors
            .iter()
            .any(|tutor| tutor.action == TutorActionEnum::Accepted)
    }
}
