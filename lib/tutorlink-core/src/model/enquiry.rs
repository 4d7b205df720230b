use serde::{Deserialize, Serialize};
use shared_types::{EnquiryId, UserId};
use strum::Display;
use time::OffsetDateTime;

use super::common::{Section, TimeWindow};

/// A request for tutoring matching, tracked through a status lifecycle.
///
/// All transitions except cancellation happen server-side; the client
/// observes the fetched status and renders it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Enquiry {
    pub id: EnquiryId,
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub mobile_number: String,
    pub home_address: String,
    pub boards: Vec<String>,
    pub classes: Vec<String>,
    pub subjects: Vec<String>,
    pub teaching_language: String,
    pub teaching_section: Section,
    pub teaching_window: TimeWindow,
    pub minimum_price: u32,
    pub maximum_price: u32,
    pub message: String,
    pub status: EnquiryStatusEnum,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
}

/// Wire vocabulary: `application_received`, `tutors_sent`, `demo_requested`,
/// `demo_completed`, `tutor_finalized`, `cancelled`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnquiryStatusEnum {
    ApplicationReceived,
    TutorsSent,
    DemoRequested,
    DemoCompleted,
    TutorFinalized,
    Cancelled,
}

/// The forward status flow, in lifecycle order. `Cancelled` is an absorbing
/// overlay reachable from any non-terminal status, not a step of the flow.
pub const STATUS_FLOW: [EnquiryStatusEnum; 5] = [
    EnquiryStatusEnum::ApplicationReceived,
    EnquiryStatusEnum::TutorsSent,
    EnquiryStatusEnum::DemoRequested,
    EnquiryStatusEnum::DemoCompleted,
    EnquiryStatusEnum::TutorFinalized,
];

impl EnquiryStatusEnum {
    /// Position within [`STATUS_FLOW`], `None` for `Cancelled`.
    pub fn flow_index(&self) -> Option<usize> {
        STATUS_FLOW.iter().position(|status| status == self)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::TutorFinalized | Self::Cancelled)
    }

    /// Whether the server may legally move an enquiry from `self` to `next`.
    /// Forward-only along the flow, except cancellation from any
    /// non-terminal status.
    pub fn can_transition_to(&self, next: EnquiryStatusEnum) -> bool {
        if next == Self::Cancelled {
            return !self.is_terminal();
        }

        match (self.flow_index(), next.flow_index()) {
            (Some(from), Some(to)) => to > from,
            _ => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_flow_index_is_strictly_increasing_along_the_flow() {
        let indices: Vec<_> = STATUS_FLOW
            .iter()
            .map(|status| status.flow_index().unwrap())
            .collect();

        assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(EnquiryStatusEnum::Cancelled.flow_index(), None);
    }

    #[test]
    fn test_forward_transitions_only() {
        use EnquiryStatusEnum::*;

        assert!(ApplicationReceived.can_transition_to(TutorsSent));
        assert!(TutorsSent.can_transition_to(TutorFinalized));
        assert!(!DemoCompleted.can_transition_to(TutorsSent));
        assert!(!TutorsSent.can_transition_to(TutorsSent));
    }

    #[test]
    fn test_cancellation_reachable_from_any_non_terminal_status() {
        use EnquiryStatusEnum::*;

        for status in STATUS_FLOW {
            assert_eq!(
                status.can_transition_to(Cancelled),
                status != TutorFinalized,
                "{status}"
            );
        }
        assert!(!Cancelled.can_transition_to(Cancelled));
    }
}
