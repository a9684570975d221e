//! `users.*` methods

use serde::de::IgnoredAny;
use serde::Deserialize;

use super::client::SlackClient;
use crate::error::SlackError;
use crate::models::{User, UserIdentityResponse, UserList, UserPresence};

/// Page size requested from `users.list`.
pub const USERS_PAGE_SIZE: u32 = 1000;

/// `users.info` nests the record under `user`; older payloads carried its
/// fields at the top level. A present `user` key always wins, so a malformed
/// nested record fails to decode instead of falling back to the top level.
#[derive(Deserialize)]
struct UserInfoPayload {
    #[serde(default)]
    user: Option<User>,
    #[serde(flatten)]
    flat: User,
}

impl From<UserInfoPayload> for User {
    fn from(payload: UserInfoPayload) -> Self {
        payload.user.unwrap_or(payload.flat)
    }
}

impl SlackClient {
    /// Current presence of `user`.
    pub async fn get_user_presence(&self, user: &str) -> Result<UserPresence, SlackError> {
        let params = self.params().set("user", user);
        self.call("users.getPresence", params).await
    }

    /// Full record of `user`.
    pub async fn get_user_info(&self, user: &str) -> Result<User, SlackError> {
        let params = self.params().set("user", user);
        let payload: UserInfoPayload = self.call("users.info", params).await?;
        Ok(payload.into())
    }

    /// One page of workspace members.
    ///
    /// Pass `""` for the first page, then the returned [`UserList::offset`]
    /// until it comes back empty.
    pub async fn get_users(&self, offset: &str) -> Result<UserList, SlackError> {
        let params = self
            .params()
            .set("limit", USERS_PAGE_SIZE.to_string())
            .set("offset", offset);
        self.call("users.list", params).await
    }

    /// Mark the authenticated user as active.
    pub async fn set_user_active(&self) -> Result<(), SlackError> {
        let _: IgnoredAny = self.call("users.setActive", self.params()).await?;
        Ok(())
    }

    /// Set the authenticated user's presence (`"auto"` or `"away"`).
    pub async fn set_user_presence(&self, presence: &str) -> Result<(), SlackError> {
        let params = self.params().set("presence", presence);
        let _: IgnoredAny = self.call("users.setPresence", params).await?;
        Ok(())
    }

    /// User and team visible through the identity scopes.
    pub async fn get_user_identity(&self) -> Result<UserIdentityResponse, SlackError> {
        self.call("users.identity", self.params()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> serde_json::Result<User> {
        serde_json::from_str::<UserInfoPayload>(json).map(User::from)
    }

    #[test]
    fn test_nested_record_wins() {
        let user = decode(r#"{"user": {"id": "U1", "name": "alice"}, "warning": "x"}"#).unwrap();
        assert_eq!(user.id, "U1");
        assert_eq!(user.name, "alice");
    }

    #[test]
    fn test_flat_record_without_user_key() {
        let user = decode(r#"{"id": "U2", "name": "bob"}"#).unwrap();
        assert_eq!(user.id, "U2");
    }

    #[test]
    fn test_bad_nested_record_does_not_fall_back() {
        assert!(decode(r#"{"user": {"id": "U1", "tz_offset": "bad"}}"#).is_err());
        assert!(decode(r#"{"user": "U1"}"#).is_err());
    }
}
