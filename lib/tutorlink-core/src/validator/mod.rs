//! Pure field-level form validation.
//!
//! Each validator is a stateless function from a field value to
//! `Result<_, FieldError>`; step validators compose them into a
//! [`FieldErrors`] map keyed by field name, in field order, which the
//! rendering layer surfaces inline.

pub mod field;

use indexmap::IndexMap;
use thiserror::Error;

/// Ordered field → message map produced by a step validator.
pub type FieldErrors = IndexMap<String, String>;

pub(crate) fn collect_error(
    errors: &mut FieldErrors,
    field: &str,
    result: Result<(), FieldError>,
) {
    if let Err(error) = result {
        errors.insert(field.to_string(), error.to_string());
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum FieldError {
    #[error("Username is required")]
    UsernameRequired,
    #[error("Username or Email is required")]
    LoginIdentifierRequired,
    #[error("Username must be at least 3 characters")]
    LoginIdentifierTooShort,
    #[error("Username must be 3-20 characters (letters, numbers, underscore only)")]
    UsernameInvalid,

    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email address")]
    EmailInvalid,

    #[error("Mobile number is required")]
    MobileRequired,
    #[error("Mobile number must be a valid 10-digit number starting with 6-9")]
    MobileInvalid,

    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Please confirm your password")]
    ConfirmPasswordRequired,
    #[error("Passwords must match")]
    PasswordMismatch,

    #[error("Date of birth is required")]
    DateOfBirthRequired,
    #[error("Invalid date format")]
    DateOfBirthUnparseable,
    #[error("Date of birth cannot be in the future")]
    DateOfBirthInFuture,
    #[error("Age must be between 5 and 100 years")]
    AgeOutOfRange,

    #[error("Student class is required")]
    StudentClassRequired,

    #[error("Street address is required")]
    StreetRequired,
    #[error("Street address must be 5-100 characters")]
    StreetInvalid,
    #[error("City is required")]
    CityRequired,
    #[error("City must be 2-50 characters, letters only")]
    CityInvalid,
    #[error("State is required")]
    StateRequired,
    #[error("State must be 2-50 characters, letters only")]
    StateInvalid,
    #[error("Pin code is required")]
    PinCodeRequired,
    #[error("Pin code must be 6 digits")]
    PinCodeInvalid,
    #[error("Country is required")]
    CountryRequired,
    #[error("Country must be 2-50 characters")]
    CountryInvalid,
    #[error("Address is required")]
    AddressRequired,

    #[error("Price must be a number")]
    PriceNotNumeric,
    #[error("Price must be between ₹50 and ₹10,000")]
    PriceOutOfRange,
    #[error("Maximum price must not be below minimum price")]
    PriceRangeInverted,

    #[error("Experience must be a whole number")]
    ExperienceNotNumeric,
    #[error("Experience must be between 0 and 70 years")]
    ExperienceOutOfRange,

    #[error("Contact name is required")]
    ContactNameRequired,
    #[error("Demo date is required")]
    DemoDateRequired,
    #[error("Invalid date format")]
    DateUnparseable,

    #[error("Time is required")]
    TimeRequired,
    #[error("Time must be in HH:MM format (00:00 - 23:59)")]
    TimeInvalid,
    #[error("End time must be after start time")]
    EndTimeNotAfterStart,

    #[error("Please select at least one board")]
    BoardsRequired,
    #[error("Maximum 5 boards allowed")]
    BoardsTooMany,
    #[error("Please select at least one class")]
    ClassesRequired,
    #[error("Maximum 12 classes allowed")]
    ClassesTooMany,
    #[error("Please select at least one subject")]
    SubjectsRequired,
    #[error("Maximum 10 subjects allowed")]
    SubjectsTooMany,

    #[error("Please select teaching language")]
    LanguageRequired,
    #[error("Language must be 2-50 characters")]
    LanguageInvalid,
    #[error("Please select a valid section")]
    SectionInvalid,
    #[error("Please select a valid gender")]
    GenderInvalid,

    #[error("Qualification must be 10-200 characters")]
    QualificationInvalid,
    #[error("About must be 20-1000 characters")]
    AboutInvalid,

    #[error("Please add at least one availability slot")]
    AvailabilityRequired,
    #[error("Maximum 21 availability slots allowed (3 per day)")]
    AvailabilityTooMany,
    #[error("Time slots overlap on {0}")]
    AvailabilityOverlap(crate::model::common::Section),
}
