use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::Time;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

pub(crate) const HHMM_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[hour]:[minute]");
pub(crate) const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

// serde helpers for the wire representations "HH:MM" and "YYYY-MM-DD"
time::serde::format_description!(pub hhmm, Time, "[hour]:[minute]");
time::serde::format_description!(pub ymd, Date, "[year]-[month]-[day]");

/// Coarse time-of-day bucket used for availability and teaching-slot matching.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Section {
    Morning,
    Afternoon,
    Evening,
    Night,
}

/// Half-open daily time window. `end` must be strictly after `start`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    #[serde(with = "hhmm")]
    pub start: Time,
    #[serde(with = "hhmm")]
    pub end: Time,
}

impl TimeWindow {
    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }

    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// One recurring availability slot of a tutor.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub section: Section,
    #[serde(flatten)]
    pub window: TimeWindow,
}
