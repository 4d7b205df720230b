//! Strongly-typed identifiers shared across the workspace.
//!
//! The backend issues plain numeric ids; wrapping them keeps an `EnquiryId`
//! from ever being passed where a `TutorId` is expected.

use thiserror::Error;

mod address_id;
mod booking_id;
mod demo_request_id;
mod enquiry_id;
mod tutor_id;
mod user_id;

pub(crate) mod macros;

pub use address_id::AddressId;
pub use booking_id::BookingId;
pub use demo_request_id::DemoRequestId;
pub use enquiry_id::EnquiryId;
pub use tutor_id::TutorId;
pub use user_id::UserId;

#[derive(Debug, Error)]
#[error("invalid id: `{0}`")]
pub struct InvalidIdError(pub String);
