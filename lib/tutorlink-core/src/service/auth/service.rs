use time::OffsetDateTime;

use super::AuthService;
use super::dto::{
    LoginRequestDTO, LoginResponseDTO, RegisterResponseDTO, StudentRegistrationFormDTO,
    TutorRegistrationFormDTO,
};
use super::mapper::{student_request_from_form, tutor_request_from_form};
use super::validator::{
    STUDENT_REGISTRATION_STEPS, TUTOR_REGISTRATION_STEPS, student_step_validator,
    tutor_step_validator, validate_login, validate_student_registration,
    validate_tutor_registration,
};
use crate::model::user::User;
use crate::service::error::{ServiceError, ValidationError};
use crate::validator::FieldErrors;
use crate::wizard::Wizard;

impl AuthService {
    /// Fresh two-step student registration wizard under the configured
    /// validation policy.
    pub fn student_registration_wizard(&self) -> Wizard<StudentRegistrationFormDTO> {
        Wizard::new(
            STUDENT_REGISTRATION_STEPS,
            self.config.validation.wizard_policy,
            StudentRegistrationFormDTO::default(),
        )
    }

    /// The per-step validator backing [`Self::student_registration_wizard`],
    /// evaluated against `today`'s date.
    pub fn validate_student_step(
        step: usize,
        form: &StudentRegistrationFormDTO,
        today: time::Date,
    ) -> FieldErrors {
        student_step_validator(step, form, today)
    }

    /// Fresh four-step tutor registration wizard under the configured
    /// validation policy.
    pub fn tutor_registration_wizard(&self) -> Wizard<TutorRegistrationFormDTO> {
        Wizard::new(
            TUTOR_REGISTRATION_STEPS,
            self.config.validation.wizard_policy,
            TutorRegistrationFormDTO::default(),
        )
    }

    /// The per-step validator backing [`Self::tutor_registration_wizard`].
    pub fn validate_tutor_step(step: usize, form: &TutorRegistrationFormDTO) -> FieldErrors {
        tutor_step_validator(step, form)
    }

    /// Authenticates and persists the session (token pair + user).
    ///
    /// # Arguments
    ///
    /// * `username` - username or email
    /// * `password` - plaintext password, forwarded to the backend
    pub async fn login(&self, username: &str, password: &str) -> Result<User, ServiceError> {
        let errors = validate_login(username, password);
        if !errors.is_empty() {
            return Err(ValidationError::Fields(errors).into());
        }

        let url = self.config.api.endpoint("/auth/login");
        let response = self
            .client
            .post(&url)
            .json(LoginRequestDTO {
                username: username.trim().to_string(),
                password: password.to_string(),
            })?
            .send()
            .await?;

        // a 401 here is a bad credential, not an expired session
        if !response.status.is_success() {
            return Err(ServiceError::from_error_response(&response));
        }

        let body: LoginResponseDTO = response.json()?;
        self.session.store_session(&body.tokens, &body.user).await?;
        tracing::debug!(user_id = %body.user.id, "login succeeded");
        Ok(body.user)
    }

    /// Registers a student from the completed wizard form. The whole form
    /// is re-validated before dispatch; server-side rejections come back as
    /// [`ValidationError::ServerRejected`] with existence conflicts split
    /// out, leaving the entered values untouched.
    pub async fn register_student(
        &self,
        form: &StudentRegistrationFormDTO,
    ) -> Result<RegisterResponseDTO, ServiceError> {
        let today = OffsetDateTime::now_utc().date();
        let errors = validate_student_registration(form, today);
        if !errors.is_empty() {
            return Err(ValidationError::Fields(errors).into());
        }

        let request = student_request_from_form(form, today)?;
        let url = self.config.api.endpoint("/auth/register");
        let response = self.client.post(&url).json(request)?.send().await?;

        if !response.status.is_success() {
            return Err(ServiceError::from_error_response(&response));
        }
        response.json().map_err(ServiceError::from)
    }

    pub async fn register_tutor(
        &self,
        form: &TutorRegistrationFormDTO,
    ) -> Result<RegisterResponseDTO, ServiceError> {
        let errors = validate_tutor_registration(form);
        if !errors.is_empty() {
            return Err(ValidationError::Fields(errors).into());
        }

        let request = tutor_request_from_form(form)?;
        let url = self.config.api.endpoint("/auth/register");
        let response = self.client.post(&url).json(request)?.send().await?;

        if !response.status.is_success() {
            return Err(ServiceError::from_error_response(&response));
        }
        response.json().map_err(ServiceError::from)
    }

    /// Clears the persisted session and notifies dependent screens.
    pub async fn logout(&self) -> Result<(), ServiceError> {
        self.session.clear().await?;
        self.refresh_signal.trigger();
        Ok(())
    }
}
