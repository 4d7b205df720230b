use super::dto::BookDemoFormDTO;
use crate::validator::field::{
    validate_contact_name, validate_demo_date, validate_email, validate_mobile_number,
    validate_time_hhmm,
};
use crate::validator::{FieldErrors, collect_error};

pub(crate) fn validate_book_demo(form: &BookDemoFormDTO) -> FieldErrors {
    let mut errors = FieldErrors::new();
    collect_error(
        &mut errors,
        "contact_name",
        validate_contact_name(&form.contact_name),
    );
    collect_error(
        &mut errors,
        "contact_email",
        validate_email(&form.contact_email),
    );
    collect_error(
        &mut errors,
        "contact_mobile",
        validate_mobile_number(&form.contact_mobile),
    );
    collect_error(
        &mut errors,
        "demo_date",
        validate_demo_date(&form.demo_date).map(|_| ()),
    );
    collect_error(
        &mut errors,
        "demo_time",
        validate_time_hhmm(&form.demo_time).map(|_| ()),
    );
    errors
}
