use serde::{Deserialize, Serialize};
use shared_types::{DemoRequestId, EnquiryId, TutorId};
use strum::Display;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

/// A scheduled trial session between a candidate tutor and the requester,
/// with independent two-sided acceptance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DemoRequest {
    pub id: DemoRequestId,
    pub enquiry_id: EnquiryId,
    pub tutor_id: TutorId,
    pub demo_date: Date,
    pub demo_time: Time,
    pub message: Option<String>,
    pub user_application_accepted: ApplicationDecisionEnum,
    pub tutor_application_accepted: ApplicationDecisionEnum,
    pub created_date: OffsetDateTime,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationDecisionEnum {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl DemoRequest {
    /// Both sides accepted; the matching process for this tutor is closed.
    pub fn is_application_finalized(&self) -> bool {
        self.user_application_accepted == ApplicationDecisionEnum::Accepted
            && self.tutor_application_accepted == ApplicationDecisionEnum::Accepted
    }

    pub fn scheduled_at(&self) -> OffsetDateTime {
        PrimitiveDateTime::new(self.demo_date, self.demo_time).assume_utc()
    }

    /// Derived, never stored: recomputed against the caller's clock on every
    /// evaluation. The scheduled instant itself counts as completed.
    pub fn is_completed(&self, now: OffsetDateTime) -> bool {
        now >= self.scheduled_at()
    }
}

#[cfg(test)]
mod test {
    use time::macros::datetime;

    use super::*;

    fn demo_at_ten() -> DemoRequest {
        let scheduled = datetime!(2025-01-01 10:00 UTC);
        DemoRequest {
            id: 1.into(),
            enquiry_id: 7.into(),
            tutor_id: 3.into(),
            demo_date: scheduled.date(),
            demo_time: scheduled.time(),
            message: None,
            user_application_accepted: ApplicationDecisionEnum::Pending,
            tutor_application_accepted: ApplicationDecisionEnum::Pending,
            created_date: datetime!(2024-12-30 08:00 UTC),
        }
    }

    #[test]
    fn test_completion_is_a_pure_function_of_the_schedule() {
        let demo = demo_at_ten();

        assert!(!demo.is_completed(datetime!(2025-01-01 9:59 UTC)));
        assert!(demo.is_completed(datetime!(2025-01-01 10:00 UTC)));
        assert!(demo.is_completed(datetime!(2025-01-01 10:01 UTC)));
    }

    #[test]
    fn test_finalized_requires_both_acceptances() {
        let mut demo = demo_at_ten();
        assert!(!demo.is_application_finalized());

        demo.user_application_accepted = ApplicationDecisionEnum::Accepted;
        assert!(!demo.is_application_finalized());

        demo.tutor_application_accepted = ApplicationDecisionEnum::Accepted;
        assert!(demo.is_application_finalized());
    }
}
