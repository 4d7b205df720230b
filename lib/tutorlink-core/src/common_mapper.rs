use crate::provider::http_client::Response;
use crate::service::error::ServiceError;
use crate::service::session::SessionService;

/// Gate every authenticated response through the error taxonomy. A 401
/// clears the local session before surfacing [`ServiceError::Unauthorized`];
/// the shell reacts by navigating to login.
pub(crate) async fn ensure_success(
    response: Response,
    session: &SessionService,
) -> Result<Response, ServiceError> {
    if response.status.is_success() {
        return Ok(response);
    }

    let error = ServiceError::from_error_response(&response);
    if matches!(error, ServiceError::Unauthorized) {
        return Err(session.expire().await);
    }
    Err(error)
}
