//! Christmas Eve same-day cutoff.
//!
//! Requests can be placed on December 24 up to and including the cutoff time
//! (13:00:00 by default); anything strictly later that day is past cutoff.

use crate::date_time::{DateTime, TimeOfDay};

/// The Christmas Eve cutoff time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChristmasEveCutoff {
    cutoff: TimeOfDay,
}

impl ChristmasEveCutoff {
    /// 13:00:00.
    pub const DEFAULT_CUTOFF: TimeOfDay = TimeOfDay::hms(13, 0, 0);

    /// Use a custom cutoff time.
    pub fn new(cutoff: TimeOfDay) -> Self {
        Self { cutoff }
    }

    /// The configured cutoff time.
    pub fn cutoff(&self) -> TimeOfDay {
        self.cutoff
    }

    /// Return `true` if `at` is on December 24 and strictly after the cutoff.
    pub fn is_past_cutoff(&self, at: DateTime) -> bool {
        let d = at.date();
        d.month() == 12 && d.day_of_month() == 24 && at.time() > self.cutoff
    }
}

impl Default for ChristmasEveCutoff {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CUTOFF)
    }
}

/// Return `true` if `at` falls on Christmas Eve after 13:00:00.
pub fn is_christmas_eve(at: DateTime) -> bool {
    ChristmasEveCutoff::default().is_past_cutoff(at)
}
