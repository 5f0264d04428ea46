/// Core traits for Roster
use crate::error::Result;
use chrono::{DateTime, Utc};

/// Time source
///
/// Activity logging reads the current instant through this trait so that
/// callers can substitute a deterministic source and assert exact output.
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant
///
/// Every call to [`Clock::now`] returns the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Create a clock pinned to the given instant
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Create a clock pinned to an RFC 3339 timestamp
    ///
    /// # Errors
    /// Returns an error if the string is not a valid RFC 3339 timestamp
    pub fn from_rfc3339(timestamp: &str) -> Result<Self> {
        let instant = DateTime::parse_from_rfc3339(timestamp)?.with_timezone(&Utc);
        Ok(Self { instant })
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
