use crate::model::enquiry::Enquiry;
use crate::model::round::{TutorActionEnum, TutorCandidate};
use crate::service::error::{BusinessLogicError, ServiceError};

pub(crate) fn throw_if_enquiry_terminal(enquiry: &Enquiry) -> Result<(), ServiceError> {
    if enquiry.status.is_terminal() {
        return Err(BusinessLogicError::EnquiryAlreadyClosed(enquiry.id).into());
    }
    Ok(())
}

pub(crate) fn throw_if_candidate_accepted(candidate: &TutorCandidate) -> Result<(), ServiceError> {
    if candidate.action == TutorActionEnum::Accepted {
        return Err(BusinessLogicError::TutorAlreadyAccepted(candidate.tutor_id).into());
    }
    Ok(())
}
