//! Typed client for the Slack Web API `users.*` and `team.*` methods.
//!
//! ```no_run
//! use slack_users::{ClientConfig, SlackClient};
//!
//! # async fn run() -> Result<(), slack_users::SlackError> {
//! let client = SlackClient::new(ClientConfig::new("xoxp-..."))?;
//! let user = client.get_user_info("U023BECGF").await?;
//! println!("{} ({})", user.name, user.id);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;

pub use api::{Params, SlackClient, USERS_PAGE_SIZE};
pub use config::ClientConfig;
pub use error::{ErrorKind, SlackError};
