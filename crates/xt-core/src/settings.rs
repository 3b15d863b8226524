//! Process-wide settings.
//!
//! [`Settings`] holds the **evaluation instant** (an override for "now",
//! stored as UTC seconds since the Unix epoch) and the **default time zone**
//! used by the clock. It is a singleton accessed via a `std::sync::OnceLock`.
//!
//! Thread safety: both values live behind a `Mutex` so that they can be
//! changed from any thread. Tests that change the evaluation instant should
//! use [`ScopedEvaluationInstant`] so the previous value is restored.

use std::sync::{Mutex, MutexGuard, OnceLock};

/// IANA identifier of the time zone used when none is configured.
pub const DEFAULT_TIME_ZONE: &str = "America/New_York";

/// Process-wide settings used by extendkit.
pub struct Settings {
    inner: Mutex<Inner>,
}

struct Inner {
    evaluation_instant: Option<i64>,
    time_zone: String,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            inner: Mutex::new(Inner {
                evaluation_instant: None,
                time_zone: DEFAULT_TIME_ZONE.to_string(),
            }),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // The guarded values are plain data; a panic while holding the lock
        // cannot leave them half-written.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Return the evaluation instant (UTC seconds since the Unix epoch).
    ///
    /// Returns `None` if the system clock should be used.
    pub fn evaluation_instant(&self) -> Option<i64> {
        self.lock().evaluation_instant
    }

    /// Pin "now" to the given UTC instant.
    pub fn set_evaluation_instant(&self, unix_seconds: i64) {
        self.lock().evaluation_instant = Some(unix_seconds);
    }

    /// Clear the evaluation instant, resetting it to "use the system clock".
    pub fn reset_evaluation_instant(&self) {
        self.lock().evaluation_instant = None;
    }

    /// Return the IANA identifier of the default time zone.
    pub fn time_zone(&self) -> String {
        self.lock().time_zone.clone()
    }

    /// Replace the default time zone. The identifier is validated when the
    /// clock resolves it.
    pub fn set_time_zone(&self, tz: impl Into<String>) {
        self.lock().time_zone = tz.into();
    }
}

/// Pins the evaluation instant for the lifetime of the guard and restores the
/// previous value on drop.
#[must_use = "the evaluation instant is restored as soon as the guard is dropped"]
pub struct ScopedEvaluationInstant {
    previous: Option<i64>,
}

impl ScopedEvaluationInstant {
    /// Set the evaluation instant to `unix_seconds` until the guard is dropped.
    pub fn new(unix_seconds: i64) -> Self {
        let settings = Settings::instance();
        let previous = settings.evaluation_instant();
        settings.set_evaluation_instant(unix_seconds);
        Self { previous }
    }
}

impl Drop for ScopedEvaluationInstant {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(s) => settings.set_evaluation_instant(s),
            None => settings.reset_evaluation_instant(),
        }
    }
}
