//! Slack Web API client and typed method wrappers

pub mod client;
mod params;
mod team;
mod users;

pub use client::SlackClient;
pub use params::Params;
pub use users::USERS_PAGE_SIZE;
