use super::dto::DemoRequestResponseDTO;
use crate::model::demo_request::DemoRequest;

impl From<DemoRequestResponseDTO> for DemoRequest {
    fn from(value: DemoRequestResponseDTO) -> Self {
        Self {
            id: value.id,
            enquiry_id: value.enquiry_id,
            tutor_id: value.tutor_id,
            demo_date: value.demo_date,
            demo_time: value.demo_time,
            message: value.message,
            user_application_accepted: value.user_application_accepted,
            tutor_application_accepted: value.tutor_application_accepted,
            created_date: value.created,
        }
    }
}
