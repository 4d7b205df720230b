use super::dto::OfflineEnquiryFormDTO;
use crate::validator::field::{
    validate_address, validate_boards, validate_classes, validate_email, validate_mobile_number,
    validate_price, validate_price_range, validate_section, validate_subjects,
    validate_time_hhmm, validate_time_order, validate_username,
};
use crate::validator::{FieldError, FieldErrors, collect_error};

pub(crate) const OFFLINE_ENQUIRY_STEPS: usize = 3;

/// Step 1 contact, step 2 requirements, step 3 schedule and budget.
pub(crate) fn offline_enquiry_step_validator(
    step: usize,
    form: &OfflineEnquiryFormDTO,
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
            collect_error(
                &mut errors,
                "home_address",
                validate_address(&form.home_address),
            );
        }
        2 => {
            collect_error(&mut errors, "board", validate_boards(&form.boards));
            collect_error(&mut errors, "classes", validate_classes(&form.classes));
            collect_error(&mut errors, "subjects", validate_subjects(&form.subjects));
            if form.teaching_language.trim().is_empty() {
                errors.insert(
                    "teaching_language".to_string(),
                    FieldError::LanguageRequired.to_string(),
                );
            }
            collect_error(
                &mut errors,
                "teaching_section",
                validate_section(&form.teaching_section).map(|_| ()),
            );
        }
        3 => {
            let start = validate_time_hhmm(&form.teaching_starttime);
            let end = validate_time_hhmm(&form.teaching_endtime);
            collect_error(
                &mut errors,
                "teaching_starttime",
                start.clone().map(|_| ()),
            );
            collect_error(&mut errors, "teaching_endtime", end.clone().map(|_| ()));
            if let (Ok(start), Ok(end)) = (start, end) {
                collect_error(
                    &mut errors,
                    "teaching_endtime",
                    validate_time_order(start, end),
                );
            }

            let minimum = validate_price(&form.minimum_price);
            let maximum = validate_price(&form.maximum_price);
            collect_error(&mut errors, "minimum_price", minimum.clone().map(|_| ()));
            collect_error(&mut errors, "maximum_price", maximum.clone().map(|_| ()));
            if let (Ok(minimum), Ok(maximum)) = (minimum, maximum) {
                collect_error(
                    &mut errors,
                    "maximum_price",
                    validate_price_range(minimum, maximum),
                );
            }
        }
        _ => {}
    }
    errors
}

pub(crate) fn validate_offline_enquiry(form: &OfflineEnquiryFormDTO) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for step in 1..=OFFLINE_ENQUIRY_STEPS {
        errors.extend(offline_enquiry_step_validator(step, form));
    }
    errors
}
