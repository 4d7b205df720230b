use serde::{Deserialize, Serialize};
use shared_types::{AddressId, UserId};
use time::Date;

use super::common::ymd;

/// The authenticated user as persisted in device storage and mirrored into
/// the in-memory cache. Serde derives define the persisted JSON shape.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub mobile_number: String,
    #[serde(default, with = "ymd::option")]
    pub date_of_birth: Option<Date>,
    #[serde(default)]
    pub student_class: Option<String>,
    #[serde(default)]
    pub home_address: Option<Address>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub street: String,
    pub city: String,
    pub state: String,
    pub pin_code: String,
    pub country: String,
    #[serde(default)]
    pub formatted_address: Option<String>,
}
