use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;
use time::{Date, Time};

use super::FieldError;
use crate::model::common::{AvailabilitySlot, DATE_FORMAT, HHMM_FORMAT, Section};

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]{3,20}$").unwrap());
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static MOBILE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[6-9][0-9]{9}$").unwrap());
static PIN_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{6}$").unwrap());

pub fn validate_username(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::UsernameRequired);
    }
    if !USERNAME_RE.is_match(value) {
        return Err(FieldError::UsernameInvalid);
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !EMAIL_RE.is_match(value) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(())
}

/// Non-digit separators are stripped before matching, so "98765-43210" and
/// "9876543210" validate the same.
pub fn validate_mobile_number(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::MobileRequired);
    }
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if !MOBILE_RE.is_match(&digits) {
        return Err(FieldError::MobileInvalid);
    }
    Ok(())
}

pub fn validate_password(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::PasswordRequired);
    }
    if value.chars().count() < 6 {
        return Err(FieldError::PasswordTooShort);
    }
    Ok(())
}

pub fn validate_confirm_password(password: &str, confirm: &str) -> Result<(), FieldError> {
    if confirm.is_empty() {
        return Err(FieldError::ConfirmPasswordRequired);
    }
    if password != confirm {
        return Err(FieldError::PasswordMismatch);
    }
    Ok(())
}

/// Full-year age, decremented when the birthday has not yet occurred in
/// `today`'s year.
pub(crate) fn age_on(date_of_birth: Date, today: Date) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month() as u8, today.day()) < (date_of_birth.month() as u8, date_of_birth.day()) {
        age -= 1;
    }
    age
}

pub fn validate_date_of_birth(value: &str, today: Date) -> Result<Date, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::DateOfBirthRequired);
    }
    let date =
        Date::parse(value, DATE_FORMAT).map_err(|_| FieldError::DateOfBirthUnparseable)?;
    if date > today {
        return Err(FieldError::DateOfBirthInFuture);
    }
    if !(5..=100).contains(&age_on(date, today)) {
        return Err(FieldError::AgeOutOfRange);
    }
    Ok(date)
}

pub fn validate_student_class(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::StudentClassRequired);
    }
    Ok(())
}

fn letters_and_spaces_only(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

pub fn validate_street(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::StreetRequired);
    }
    if !(5..=100).contains(&value.chars().count()) {
        return Err(FieldError::StreetInvalid);
    }
    Ok(())
}

pub fn validate_city(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::CityRequired);
    }
    if !(2..=50).contains(&value.chars().count()) || !letters_and_spaces_only(value) {
        return Err(FieldError::CityInvalid);
    }
    Ok(())
}

pub fn validate_state(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::StateRequired);
    }
    if !(2..=50).contains(&value.chars().count()) || !letters_and_spaces_only(value) {
        return Err(FieldError::StateInvalid);
    }
    Ok(())
}

pub fn validate_pin_code(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::PinCodeRequired);
    }
    if !PIN_CODE_RE.is_match(value) {
        return Err(FieldError::PinCodeInvalid);
    }
    Ok(())
}

pub fn validate_country(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::CountryRequired);
    }
    if !(2..=50).contains(&value.chars().count()) {
        return Err(FieldError::CountryInvalid);
    }
    Ok(())
}

/// Free-form home address used by the offline booking flow.
pub fn validate_address(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::AddressRequired);
    }
    Ok(())
}

pub fn validate_price(value: &str) -> Result<u32, FieldError> {
    let amount: u32 = value
        .trim()
        .parse()
        .map_err(|_| FieldError::PriceNotNumeric)?;
    if !(50..=10_000).contains(&amount) {
        return Err(FieldError::PriceOutOfRange);
    }
    Ok(amount)
}

pub fn validate_price_range(minimum: u32, maximum: u32) -> Result<(), FieldError> {
    if maximum < minimum {
        return Err(FieldError::PriceRangeInverted);
    }
    Ok(())
}

pub fn validate_experience(value: &str) -> Result<u32, FieldError> {
    let years: u32 = value
        .trim()
        .parse()
        .map_err(|_| FieldError::ExperienceNotNumeric)?;
    if years > 70 {
        return Err(FieldError::ExperienceOutOfRange);
    }
    Ok(years)
}

pub fn validate_contact_name(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::ContactNameRequired);
    }
    Ok(())
}

/// "YYYY-MM-DD"; scheduling in the past is the backend's call to reject.
pub fn validate_demo_date(value: &str) -> Result<Date, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::DemoDateRequired);
    }
    Date::parse(value, DATE_FORMAT).map_err(|_| FieldError::DateUnparseable)
}

/// 24-hour "HH:MM". A missing leading zero is tolerated ("9:30").
pub fn validate_time_hhmm(value: &str) -> Result<Time, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::TimeRequired);
    }
    let padded = if value.len() == 4 && value.as_bytes().get(1) == Some(&b':') {
        format!("0{value}")
    } else {
        value.to_string()
    };
    Time::parse(&padded, HHMM_FORMAT).map_err(|_| FieldError::TimeInvalid)
}

pub fn validate_time_order(start: Time, end: Time) -> Result<(), FieldError> {
    if end <= start {
        return Err(FieldError::EndTimeNotAfterStart);
    }
    Ok(())
}

pub fn validate_section(value: &str) -> Result<Section, FieldError> {
    value.trim().parse().map_err(|_| FieldError::SectionInvalid)
}

pub fn validate_gender(value: &str) -> Result<(), FieldError> {
    match value.trim().to_lowercase().as_str() {
        "male" | "female" | "other" => Ok(()),
        _ => Err(FieldError::GenderInvalid),
    }
}

pub fn validate_language(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::LanguageRequired);
    }
    if !(2..=50).contains(&value.chars().count()) {
        return Err(FieldError::LanguageInvalid);
    }
    Ok(())
}

pub fn validate_boards(values: &[String]) -> Result<(), FieldError> {
    match values.len() {
        0 => Err(FieldError::BoardsRequired),
        1..=5 => Ok(()),
        _ => Err(FieldError::BoardsTooMany),
    }
}

pub fn validate_classes(values: &[String]) -> Result<(), FieldError> {
    match values.len() {
        0 => Err(FieldError::ClassesRequired),
        1..=12 => Ok(()),
        _ => Err(FieldError::ClassesTooMany),
    }
}

pub fn validate_subjects(values: &[String]) -> Result<(), FieldError> {
    match values.len() {
        0 => Err(FieldError::SubjectsRequired),
        1..=10 => Ok(()),
        _ => Err(FieldError::SubjectsTooMany),
    }
}

pub fn validate_qualification(value: &str) -> Result<(), FieldError> {
    if !(10..=200).contains(&value.trim().chars().count()) {
        return Err(FieldError::QualificationInvalid);
    }
    Ok(())
}

pub fn validate_about(value: &str) -> Result<(), FieldError> {
    if !(20..=1000).contains(&value.trim().chars().count()) {
        return Err(FieldError::AboutInvalid);
    }
    Ok(())
}

/// At least one slot, at most 21, every window well-formed, and no two
/// windows within the same section overlapping.
pub fn validate_availabilities(slots: &[AvailabilitySlot]) -> Result<(), FieldError> {
    if slots.is_empty() {
        return Err(FieldError::AvailabilityRequired);
    }
    if slots.len() > 21 {
        return Err(FieldError::AvailabilityTooMany);
    }
    for slot in slots {
        if !slot.window.is_valid() {
            return Err(FieldError::EndTimeNotAfterStart);
        }
    }
    for (first, second) in slots.iter().tuple_combinations() {
        if first.section == second.section && first.window.overlaps(&second.window) {
            return Err(FieldError::AvailabilityOverlap(first.section));
        }
    }
    Ok(())
}
