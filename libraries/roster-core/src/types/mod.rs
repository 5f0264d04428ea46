mod user;

pub use user::{filter_active_users, parse_users, users_to_json, User};
