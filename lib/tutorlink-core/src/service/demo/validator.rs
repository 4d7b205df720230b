use shared_types::{EnquiryId, TutorId};
use time::OffsetDateTime;

use crate::model::demo_request::{ApplicationDecisionEnum, DemoRequest};
use crate::service::error::{BusinessLogicError, ServiceError};

/// A decision may only be solicited for a demo whose scheduled time has
/// passed, that is not finalized, and where the user has not yet decided.
/// The guard order is load-bearing: completion is checked before anything
/// else so a decision is never offered early.
pub(crate) fn throw_if_decision_not_available(
    demo: &DemoRequest,
    now: OffsetDateTime,
) -> Result<(), ServiceError> {
    if !demo.is_completed(now) {
        return Err(BusinessLogicError::DemoNotCompleted(demo.id).into());
    }
    if demo.is_application_finalized() {
        return Err(BusinessLogicError::DemoAlreadyFinalized(demo.id).into());
    }
    if demo.user_application_accepted != ApplicationDecisionEnum::Pending {
        return Err(BusinessLogicError::DecisionAlreadySubmitted(demo.id).into());
    }
    Ok(())
}

/// One demo request per (enquiry, tutor) pair.
pub(crate) fn throw_if_demo_exists(
    existing: &[DemoRequest],
    enquiry_id: EnquiryId,
    tutor_id: TutorId,
) -> Result<(), ServiceError> {
    let exists = existing
        .iter()
        .any(|demo| demo.enquiry_id == enquiry_id && demo.tutor_id == tutor_id);
    if exists {
        return Err(BusinessLogicError::DemoAlreadyScheduled {
            enquiry_id,
            tutor_id,
        }
        .into());
    }
    Ok(())
}
