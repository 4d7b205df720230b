use shared_types::{DemoRequestId, EnquiryId, TutorId, UserId};
use thiserror::Error;

use crate::config::ConfigValidationError;
use crate::provider::device_storage::StorageError;
use crate::provider::http_client;
use crate::validator::FieldErrors;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Mapping error: `{0}`")]
    MappingError(String),
    #[error("Session expired")]
    Unauthorized,

    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),
    #[error(transparent)]
    BusinessLogic(#[from] BusinessLogicError),
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Transport error: `{0}`")]
    HttpClient(#[from] http_client::Error),
    #[error("Storage error: `{0}`")]
    Storage(#[from] StorageError),
    #[error("Config validation error `{0}`")]
    ConfigValidation(#[from] ConfigValidationError),

    #[error("Other error: `{0}`")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum EntityNotFoundError {
    #[error("Tutor `{0}` not found in round")]
    TutorCandidate(TutorId),
    #[error("User `{0}` has no stored address")]
    UserAddress(UserId),
}

#[derive(Debug, Error)]
pub enum BusinessLogicError {
    #[error("Enquiry {0} is already closed")]
    EnquiryAlreadyClosed(EnquiryId),
    #[error("Cancellation requires user confirmation")]
    CancellationNotConfirmed,
    #[error("Demo already scheduled for tutor {tutor_id} on enquiry {enquiry_id}")]
    DemoAlreadyScheduled {
        enquiry_id: EnquiryId,
        tutor_id: TutorId,
    },
    #[error("Demo {0} has not reached its scheduled time")]
    DemoNotCompleted(DemoRequestId),
    #[error("Demo {0} application is already finalized")]
    DemoAlreadyFinalized(DemoRequestId),
    #[error("Decision for demo {0} was already submitted")]
    DecisionAlreadySubmitted(DemoRequestId),
    #[error("Tutor {0} is already accepted")]
    TutorAlreadyAccepted(TutorId),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{} invalid field(s)", .0.len())]
    Fields(FieldErrors),
    #[error(transparent)]
    ServerRejected(#[from] ServerValidationErrors),
}

/// The backend's validation payload: a field → message(s) map, partitioned
/// by the existence-conflict UX convention (substring match on free text;
/// the server sends no typed code).
#[derive(Debug, Default, Error)]
#[error("server rejected the submitted fields")]
pub struct ServerValidationErrors {
    /// "already exists"-style conflicts on `username`/`email`, surfaced as
    /// a distinct alert.
    pub existence_conflicts: Vec<String>,
    /// Every other rejected field, surfaced inline.
    pub field_errors: FieldErrors,
}

impl ServerValidationErrors {
    /// Parse an error body of the shape `{field: "msg"}` /
    /// `{field: ["msg", ...]}`. Returns `None` when the body is not a field
    /// map (e.g. a bare `{"message": ...}` envelope).
    pub fn from_body(body: &serde_json::Value) -> Option<Self> {
        let object = body.as_object()?;
        if object.is_empty() {
            return None;
        }
        if object.keys().all(|key| key == "message" || key == "detail") {
            return None;
        }

        let mut parsed = Self::default();
        for (field, value) in object {
            let message = match value {
                serde_json::Value::String(message) => message.clone(),
                serde_json::Value::Array(messages) => messages
                    .iter()
                    .map(|message| {
                        message
                            .as_str()
                            .map(str::to_string)
                            .unwrap_or_else(|| message.to_string())
                    })
                    .collect::<Vec<_>>()
                    .join(" "),
                other => other.to_string(),
            };

            let lowered = message.to_lowercase();
            let is_existence_conflict = (field == "username" || field == "email")
                && (lowered.contains("exist") || lowered.contains("already"));

            if is_existence_conflict {
                parsed.existence_conflicts.push(message);
            } else {
                parsed.field_errors.insert(field.clone(), message);
            }
        }
        Some(parsed)
    }
}

impl ServiceError {
    /// Map a non-success response to the error taxonomy: 401 means the
    /// session expired; a field-map body is a server validation error; a
    /// `message` envelope is surfaced as-is; anything else degrades to the
    /// status code.
    pub(crate) fn from_error_response(response: &http_client::Response) -> ServiceError {
        if response.status.0 == 401 {
            return ServiceError::Unauthorized;
        }

        if let Some(body) = response.json_value() {
            if let Some(server) = ServerValidationErrors::from_body(&body) {
                return ValidationError::ServerRejected(server).into();
            }
            if let Some(message) = body
                .get("message")
                .or_else(|| body.get("detail"))
                .and_then(|message| message.as_str())
            {
                return ServiceError::Other(message.to_string());
            }
        }

        ServiceError::Other(format!("HTTP {}", response.status))
    }
}

#[derive(Debug)]
pub enum ErrorCode {
    Enquiry001,
    Demo001,
    Demo002,
    Round001,
    Session001,
    User001,

    Validation,
    Transport,
    Storage,
    Config,
    ResponseMapping,

    Unmapped,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::Enquiry001 => "Enquiry already closed",

            ErrorCode::Demo001 => "Demo already scheduled",
            ErrorCode::Demo002 => "Demo decision not available",

            ErrorCode::Round001 => "Tutor candidate not available",

            ErrorCode::Session001 => "Session expired",

            ErrorCode::User001 => "No stored address",

            ErrorCode::Validation => "Validation error",
            ErrorCode::Transport => "Transport error",
            ErrorCode::Storage => "Storage error",
            ErrorCode::Config => "Configuration error",
            ErrorCode::ResponseMapping => "Response mapping error",

            ErrorCode::Unmapped => "Unmapped error code",
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::EntityNotFound(error) => error.error_code(),
            ServiceError::BusinessLogic(error) => error.error_code(),
            ServiceError::Validation(_) => ErrorCode::Validation,
            ServiceError::HttpClient(_) => ErrorCode::Transport,
            ServiceError::Storage(_) => ErrorCode::Storage,
            ServiceError::ConfigValidation(_) => ErrorCode::Config,
            ServiceError::Unauthorized => ErrorCode::Session001,
            ServiceError::MappingError(_) => ErrorCode::ResponseMapping,
            ServiceError::Other(_) => ErrorCode::Unmapped,
        }
    }
}

impl EntityNotFoundError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EntityNotFoundError::TutorCandidate(_) => ErrorCode::Round001,
            EntityNotFoundError::UserAddress(_) => ErrorCode::User001,
        }
    }
}

impl BusinessLogicError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            BusinessLogicError::EnquiryAlreadyClosed(_)
            | BusinessLogicError::CancellationNotConfirmed => ErrorCode::Enquiry001,
            BusinessLogicError::DemoAlreadyScheduled { .. } => ErrorCode::Demo001,
            BusinessLogicError::DemoNotCompleted(_)
            | BusinessLogicError::DemoAlreadyFinalized(_)
            | BusinessLogicError::DecisionAlreadySubmitted(_) => ErrorCode::Demo002,
            BusinessLogicError::TutorAlreadyAccepted(_) => ErrorCode::Round001,
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_existence_conflicts_are_partitioned_from_field_errors() {
        let body = json!({
            "username": ["A user with that username already exists."],
            "email": "This email exists in our records.",
            "mobile_number": ["Enter a valid mobile number."],
        });

        let parsed = ServerValidationErrors::from_body(&body).unwrap();
        assert_eq!(parsed.existence_conflicts.len(), 2);
        assert_eq!(parsed.field_errors.len(), 1);
        assert!(parsed.field_errors.contains_key("mobile_number"));
    }

    #[test]
    fn test_existence_wording_on_other_fields_stays_inline() {
        let body = json!({"mobile_number": "already registered"});

        let parsed = ServerValidationErrors::from_body(&body).unwrap();
        assert!(parsed.existence_conflicts.is_empty());
        assert_eq!(parsed.field_errors.len(), 1);
    }

    #[test]
    fn test_message_envelope_is_not_a_field_map() {
        assert!(ServerValidationErrors::from_body(&json!({"message": "boom"})).is_none());
        assert!(ServerValidationErrors::from_body(&json!({})).is_none());
        assert!(ServerValidationErrors::from_body(&json!("boom")).is_none());
    }
}
