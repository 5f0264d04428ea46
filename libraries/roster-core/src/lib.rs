//! Roster Core
//!
//! User-roster utilities: display-text capitalization, active-user
//! filtering, and timestamped action logging.
//!
//! # Architecture
//!
//! The crate defines:
//! - **Domain Types**: `User` and the roster JSON helpers
//! - **Core Traits**: `Clock`, with `SystemClock` and `FixedClock`
//! - **Operations**: `capitalize_words`, `filter_active_users`,
//!   `ActivityLog` / `log_action`
//! - **Error Handling**: unified `RosterError` and `Result` types
//!
//! The three operations are independent utilities; no data flows between
//! them.
//!
//! # Example
//!
//! ```rust
//! use roster_core::{capitalize_words, filter_active_users, ActivityLog, FixedClock, User};
//!
//! let headline = capitalize_words("weekly sign-in report");
//! assert_eq!(headline, "Weekly Sign-In Report");
//!
//! let users = vec![User::new("Alice"), User::new("Bob")];
//! let active = filter_active_users(&users);
//! assert_eq!(active.len(), 2);
//!
//! let clock = FixedClock::from_rfc3339("2024-11-27T12:00:00.000Z").unwrap();
//! let line = ActivityLog::with_clock(clock).record(Some("login"), Some("Alice"));
//! assert_eq!(line, "User Alice performed login at 2024-11-27T12:00:00.000Z");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod activity;
pub mod error;
pub mod text;
pub mod traits;
pub mod types;

// Re-export commonly used items
pub use activity::{log_action, ActivityLog};
pub use error::{Result, RosterError};
pub use text::capitalize_words;
pub use traits::{Clock, FixedClock, SystemClock};
pub use types::{filter_active_users, parse_users, users_to_json, User};
