//! Data models for Slack users and teams

mod de;
mod team;
mod time;
mod user;

pub use team::*;
pub use time::JsonTime;
pub use user::*;
