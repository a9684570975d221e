//! User-related models

use serde::{Deserialize, Serialize};

use super::de::null_default;
use super::JsonTime;

/// Profile details of a user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    #[serde(deserialize_with = "null_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_default")]
    pub last_name: String,
    #[serde(deserialize_with = "null_default")]
    pub real_name: String,
    #[serde(deserialize_with = "null_default")]
    pub real_name_normalized: String,
    #[serde(deserialize_with = "null_default")]
    pub email: String,
    #[serde(deserialize_with = "null_default")]
    pub skype: String,
    #[serde(deserialize_with = "null_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_default")]
    pub image_24: String,
    #[serde(deserialize_with = "null_default")]
    pub image_32: String,
    #[serde(deserialize_with = "null_default")]
    pub image_48: String,
    #[serde(deserialize_with = "null_default")]
    pub image_72: String,
    #[serde(deserialize_with = "null_default")]
    pub image_192: String,
    #[serde(deserialize_with = "null_default")]
    pub image_original: String,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_app_id: Option<String>,
}

/// A member of the workspace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub deleted: bool,
    #[serde(deserialize_with = "null_default")]
    pub color: String,
    #[serde(deserialize_with = "null_default")]
    pub real_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tz: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub tz_label: String,
    /// Offset from UTC in seconds
    #[serde(deserialize_with = "null_default")]
    pub tz_offset: i32,
    #[serde(deserialize_with = "null_default")]
    pub profile: UserProfile,
    #[serde(deserialize_with = "null_default")]
    pub is_bot: bool,
    #[serde(deserialize_with = "null_default")]
    pub is_admin: bool,
    #[serde(deserialize_with = "null_default")]
    pub is_owner: bool,
    #[serde(deserialize_with = "null_default")]
    pub is_primary_owner: bool,
    #[serde(deserialize_with = "null_default")]
    pub is_restricted: bool,
    #[serde(deserialize_with = "null_default")]
    pub is_ultra_restricted: bool,
    #[serde(deserialize_with = "null_default")]
    pub has_2fa: bool,
    #[serde(deserialize_with = "null_default")]
    pub has_files: bool,
    #[serde(deserialize_with = "null_default")]
    pub presence: String,
}

/// Online status of a user, as returned by `users.getPresence`.
///
/// Everything except `presence` is only reported when asking about the
/// authenticated user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPresence {
    /// `"active"` or `"away"`
    #[serde(deserialize_with = "null_default")]
    pub presence: String,
    #[serde(deserialize_with = "null_default")]
    pub online: bool,
    #[serde(deserialize_with = "null_default")]
    pub auto_away: bool,
    #[serde(deserialize_with = "null_default")]
    pub manual_away: bool,
    #[serde(deserialize_with = "null_default")]
    pub connection_count: u32,
    #[serde(deserialize_with = "null_default")]
    pub last_activity: JsonTime,
}

/// One page of `users.list`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UserList {
    #[serde(deserialize_with = "null_default")]
    pub members: Vec<User>,
    /// Token for the next page; empty when this was the last one.
    #[serde(deserialize_with = "null_default")]
    pub offset: String,
}

impl UserList {
    pub fn has_more(&self) -> bool {
        !self.offset.is_empty()
    }
}
