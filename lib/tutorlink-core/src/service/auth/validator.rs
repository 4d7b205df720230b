use time::Date;

use super::dto::{StudentRegistrationFormDTO, TutorRegistrationFormDTO};
use crate::validator::field::{
    validate_about, validate_availabilities, validate_boards, validate_city, validate_classes,
    validate_confirm_password, validate_country, validate_date_of_birth, validate_email,
    validate_experience, validate_gender, validate_language, validate_mobile_number,
    validate_password, validate_pin_code, validate_price, validate_qualification, validate_state,
    validate_street, validate_student_class, validate_subjects, validate_username,
};
use crate::validator::{FieldError, FieldErrors, collect_error};

pub(crate) const STUDENT_REGISTRATION_STEPS: usize = 2;
pub(crate) const TUTOR_REGISTRATION_STEPS: usize = 4;

/// The login field accepts a username or an email, so only length is
/// checked; the password only has to be present.
pub(crate) fn validate_login(username: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if username.trim().is_empty() {
        errors.insert(
            "username".to_string(),
            FieldError::LoginIdentifierRequired.to_string(),
        );
    } else if username.trim().chars().count() < 3 {
        errors.insert(
            "username".to_string(),
            FieldError::LoginIdentifierTooShort.to_string(),
        );
    }
    if password.is_empty() {
        errors.insert(
            "password".to_string(),
            FieldError::PasswordRequired.to_string(),
        );
    }
    errors
}

/// Step 1 collects the account, step 2 the student details and address.
pub(crate) fn student_step_validator(
    step: usize,
    form: &StudentRegistrationFormDTO,
    today: Date,
) -> FieldErrors {
    let mut errors = FieldErrors::new();
    match step {
        1 => {
            collect_error(&mut errors, "username", validate_username(&form.username));
            collect_error(&mut errors, "email", validate_email(&form.email));
            collect_error(
                &mut errors,
                "mobile_number",
                validate_mobile_number(&form.mobile_number),
            );
            collect_error(&mut errors, "password", validate_password(&form.password));
            collect_error(
                &mut errors,
                "confirm_password",
                validate_confirm_password(&form.password, &form.confirm_password),
            );
        }
        2 => {
            collect_error(
                &mut errors,
                "date_of_birth",
                validate_date_of_birth(&form.date_of_birth, today).map(|_| ()),
            );
            collect_error(
                &mut errors,
                "student_class",
                validate_student_class(&form.student_class),
            );
            collect_error(&mut errors, "street", validate_street(&form.address.street));
            collect_error(&mut errors, "city", validate_city(&form.address.city));
            collect_error(&mut errors, "state", validate_state(&form.address.state));
            collect_error(
                &mut errors,
                "pin_code",
                validate_pin_code(&form.address.pin_code),
            );
            collect_error(
                &mut errors,
                "country",
                validate_country(&form.address.country),
            );
        }
        _ => {}
    }
    errors
}

pub(crate) fn validate_student_registration(
    form: &StudentRegistrationFormDTO,
    today: Date,
) -> FieldErrors {
    let mut errors = student_step_validator(1, form, today);
    errors.extend(student_step_validator(2, form, today));
    errors
}

/// Step 1 account, step 2 address, step 3 teaching profile, step 4
/// availability slots.
pub(crate) fn tutor_step_validator(step: usize, form: &TutorRegistrationFormDTO) -> FieldErrors {
    let mut errors = FieldErrors::new();
    match step {
        1 => {
            collect_error(&mut errors, "username", validate_username(&form.username));
            collect_error(&mut errors, "email", validate_email(&form.email));
            collect_error(
                &mut errors,
                "mobile_number",
                validate_mobile_number(&form.mobile_number),
            );
            collect_error(&mut errors, "password", validate_password(&form.password));
            collect_error(
                &mut errors,
                "confirm_password",
                validate_confirm_password(&form.password, &form.confirm_password),
            );
        }
        2 => {
            collect_error(&mut errors, "street", validate_street(&form.street));
            collect_error(&mut errors, "city", validate_city(&form.city));
            collect_error(&mut errors, "state", validate_state(&form.state));
            collect_error(&mut errors, "pin_code", validate_pin_code(&form.pin_code));
            collect_error(&mut errors, "country", validate_country(&form.country));
        }
        3 => {
            collect_error(&mut errors, "board", validate_boards(&form.boards));
            collect_error(&mut errors, "classes", validate_classes(&form.classes));
            collect_error(&mut errors, "subjects", validate_subjects(&form.subjects));
            collect_error(
                &mut errors,
                "education_qualification",
                validate_qualification(&form.education_qualification),
            );
            collect_error(&mut errors, "price", validate_price(&form.price).map(|_| ()));
            collect_error(
                &mut errors,
                "experience",
                validate_experience(&form.experience).map(|_| ()),
            );
            collect_error(&mut errors, "about", validate_about(&form.about));
            collect_error(&mut errors, "gender", validate_gender(&form.gender));
            collect_error(&mut errors, "language", validate_language(&form.language));
        }
        4 => {
            collect_error(
                &mut errors,
                "availabilities",
                validate_availabilities(&form.availabilities),
            );
        }
        _ => {}
    }
    errors
}

pub(crate) fn validate_tutor_registration(form: &TutorRegistrationFormDTO) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for step in 1..=TUTOR_REGISTRATION_STEPS {
        errors.extend(tutor_step_validator(step, form));
    }
    errors
}
