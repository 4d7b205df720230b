use super::dto::{
    CreateEnquiryRequestDTO, EnquiryFlowItemDTO, EnquiryResponseDTO, EnquiryTimelineDTO,
    OfflineEnquiryFormDTO, TimelineStepDTO, TimelineStepState,
};
use crate::model::common::TimeWindow;
use crate::model::enquiry::{Enquiry, EnquiryStatusEnum, STATUS_FLOW};
use crate::service::error::ServiceError;
use crate::validator::field::{validate_price, validate_section, validate_time_hhmm};

/// Build the wire payload from a form that already passed validation; a
/// parse failure here means the form was mapped without validating.
pub(crate) fn create_request_from_form(
    form: &OfflineEnquiryFormDTO,
) -> Result<CreateEnquiryRequestDTO, ServiceError> {
    let map_field = |error: crate::validator::FieldError| ServiceError::MappingError(error.to_string());

    Ok(CreateEnquiryRequestDTO {
        username: form.username.trim().to_string(),
        email: form.email.trim().to_string(),
        mobile_number: form.mobile_number.trim().to_string(),
        home_address: form.home_address.trim().to_string(),
        board: form.boards.clone(),
        classes: form.classes.clone(),
        subjects: form.subjects.clone(),
        teaching_language: form.teaching_language.trim().to_string(),
        teaching_section: validate_section(&form.teaching_section).map_err(map_field)?,
        teaching_starttime: validate_time_hhmm(&form.teaching_starttime).map_err(map_field)?,
        teaching_endtime: validate_time_hhmm(&form.teaching_endtime).map_err(map_field)?,
        minimum_price: validate_price(&form.minimum_price).map_err(map_field)?,
        maximum_price: validate_price(&form.maximum_price).map_err(map_field)?,
        message: form.message.trim().to_string(),
    })
}

impl From<EnquiryResponseDTO> for Enquiry {
    fn from(value: EnquiryResponseDTO) -> Self {
        Self {
            id: value.id,
            user_id: value.user,
            username: value.user_username,
            email: value.email,
            mobile_number: value.mobile_number,
            home_address: value.home_address,
            boards: value.board,
            classes: value.classes,
            subjects: value.subjects,
            teaching_language: value.teaching_language,
            teaching_section: value.teaching_section,
            teaching_window: TimeWindow {
                start: value.teaching_starttime,
                end: value.teaching_endtime,
            },
            minimum_price: value.minimum_price,
            maximum_price: value.maximum_price,
            message: value.message,
            status: value.status,
            created_date: value.created,
            last_modified: value.last_modified.unwrap_or(value.created),
        }
    }
}

/// Timeline for a single known status: steps before it are completed, the
/// status itself is active, the rest upcoming. A cancelled enquiry has no
/// active forward step.
pub fn timeline_from_status(status: EnquiryStatusEnum) -> EnquiryTimelineDTO {
    build_timeline(status.flow_index(), status == EnquiryStatusEnum::Cancelled)
}

/// Timeline from the fetched status-flow history: progress is the furthest
/// forward status ever reached, cancellation an overlay. Reached steps stay
/// completed after cancellation.
pub fn timeline_from_flow(items: &[EnquiryFlowItemDTO]) -> EnquiryTimelineDTO {
    let cancelled = items
        .iter()
        .any(|item| item.status == EnquiryStatusEnum::Cancelled);
    let current = items
        .iter()
        .filter_map(|item| item.status.flow_index())
        .max();

    build_timeline(current, cancelled)
}

fn build_timeline(current: Option<usize>, cancelled: bool) -> EnquiryTimelineDTO {
    let steps = STATUS_FLOW
        .iter()
        .enumerate()
        .map(|(index, &status)| {
            let state = match current {
                Some(current) if index < current => TimelineStepState::Completed,
                // a reached step counts as completed once the enquiry died
                Some(current) if index == current && cancelled => TimelineStepState::Completed,
                Some(current) if index == current => TimelineStepState::Active,
                _ => TimelineStepState::Upcoming,
            };
            TimelineStepDTO { status, state }
        })
        .collect();

    EnquiryTimelineDTO { steps, cancelled }
}
