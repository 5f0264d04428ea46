//! Activity logging
//!
//! Formats user actions into timestamped status lines and emits them on the
//! log stream.

use chrono::SecondsFormat;

use crate::traits::{Clock, SystemClock};

/// Rendered in place of an absent action or username
const MISSING_VALUE: &str = "undefined";

/// Formatter for user action lines
///
/// Reads the current instant through an injected [`Clock`]; the default is
/// [`SystemClock`]. Substitute a [`FixedClock`](crate::traits::FixedClock)
/// to make the output deterministic.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog<C = SystemClock> {
    clock: C,
}

impl ActivityLog<SystemClock> {
    /// Create a log that reads the system clock
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> ActivityLog<C> {
    /// Create a log that reads the given clock
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Record a user action
    ///
    /// Returns `User <username> performed <action> at <timestamp>`, where
    /// the timestamp is the clock's current instant rendered as RFC 3339
    /// with millisecond precision and a `Z` suffix. An absent action or
    /// username renders as the literal `undefined`; empty strings render as
    /// empty. The line is emitted at info level before being returned.
    pub fn record(&self, action: Option<&str>, username: Option<&str>) -> String {
        let timestamp = self
            .clock
            .now()
            .to_rfc3339_opts(SecondsFormat::Millis, true);
        let line = format!(
            "User {} performed {} at {}",
            username.unwrap_or(MISSING_VALUE),
            action.unwrap_or(MISSING_VALUE),
            timestamp
        );

        tracing::info!("{}", line);
        line
    }
}

/// Record a user action against the system clock
///
/// Convenience form of [`ActivityLog::record`].
pub fn log_action(action: Option<&str>, username: Option<&str>) -> String {
    ActivityLog::new().record(action, username)
}
