use time::Date;

use super::dto::{UpdateAddressRequestDTO, UpdateUserRequestDTO};
use crate::validator::field::{
    age_on, validate_city, validate_country, validate_email, validate_mobile_number,
    validate_pin_code, validate_state, validate_street, validate_student_class, validate_username,
};
use crate::validator::{FieldError, FieldErrors, collect_error};

/// Only present fields are validated; a patch never complains about what
/// it does not touch.
pub(crate) fn validate_profile_update(
    request: &UpdateUserRequestDTO,
    today: Date,
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Some(username) = &request.username {
        collect_error(&mut errors, "username", validate_username(username));
    }
    if let Some(email) = &request.email {
        collect_error(&mut errors, "email", validate_email(email));
    }
    if let Some(mobile_number) = &request.mobile_number {
        collect_error(
            &mut errors,
            "mobile_number",
            validate_mobile_number(mobile_number),
        );
    }
    if let Some(date_of_birth) = request.date_of_birth {
        let result = if date_of_birth > today {
            Err(FieldError::DateOfBirthInFuture)
        } else if !(5..=100).contains(&age_on(date_of_birth, today)) {
            Err(FieldError::AgeOutOfRange)
        } else {
            Ok(())
        };
        collect_error(&mut errors, "date_of_birth", result);
    }
    if let Some(student_class) = &request.student_class {
        collect_error(
            &mut errors,
            "student_class",
            validate_student_class(student_class),
        );
    }
    errors
}

pub(crate) fn validate_address_update(request: &UpdateAddressRequestDTO) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Some(street) = &request.street {
        collect_error(&mut errors, "street", validate_street(street));
    }
    if let Some(city) = &request.city {
        collect_error(&mut errors, "city", validate_city(city));
    }
    if let Some(state) = &request.state {
        collect_error(&mut errors, "state", validate_state(state));
    }
    if let Some(pin_code) = &request.pin_code {
        collect_error(&mut errors, "pin_code", validate_pin_code(pin_code));
    }
    if let Some(country) = &request.country {
        collect_error(&mut errors, "country", validate_country(country));
    }
    errors
}
