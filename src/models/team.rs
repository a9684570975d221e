//! Identity, team and billing models

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::de::null_default;

/// The authenticated user as seen through the identity scopes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserIdentity {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub email: String,
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
    pub image_512: String,
}

/// The workspace as seen through the identity scopes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamIdentity {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_default")]
    pub image_34: String,
    #[serde(deserialize_with = "null_default")]
    pub image_44: String,
    #[serde(deserialize_with = "null_default")]
    pub image_68: String,
    #[serde(deserialize_with = "null_default")]
    pub image_88: String,
    #[serde(deserialize_with = "null_default")]
    pub image_102: String,
    #[serde(deserialize_with = "null_default")]
    pub image_132: String,
    #[serde(deserialize_with = "null_default")]
    pub image_230: String,
    #[serde(deserialize_with = "null_default")]
    pub image_default: bool,
    #[serde(deserialize_with = "null_default")]
    pub image_original: String,
}

/// Result of `users.identity`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UserIdentityResponse {
    #[serde(deserialize_with = "null_default")]
    pub user: UserIdentity,
    #[serde(deserialize_with = "null_default")]
    pub team: TeamIdentity,
}

/// Billing state of one user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingActive {
    #[serde(deserialize_with = "null_default")]
    pub billing_active: bool,
}

/// Result of `team.billableInfo`, keyed by user ID.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BillableInfo {
    #[serde(deserialize_with = "null_default")]
    pub billable_info: HashMap<String, BillingActive>,
}

impl BillableInfo {
    /// `None` when Slack did not report on `user_id`.
    pub fn is_billing_active(&self, user_id: &str) -> Option<bool> {
        self.billable_info.get(user_id).map(|b| b.billing_active)
    }

    /// Number of users currently billed.
    pub fn active_count(&self) -> usize {
        self.billable_info.values().filter(|b| b.billing_active).count()
    }
}

/// Workspace details from `team.info`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamInfo {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_default")]
    pub email_domain: String,
    /// Icon URLs keyed by size name (`image_34`, ...), plus `image_default`
    #[serde(deserialize_with = "null_default")]
    pub icon: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_decodes() {
        let json = r#"{
            "user": {"id": "U0G9QF9C6", "name": "Sonny Whether", "email": "sonny@captain-fabian.com"},
            "team": {"id": "T0G9PQBBK", "name": "Captain Fabian's Naval Supply", "domain": "captain-fabian", "image_default": true}
        }"#;
        let identity: UserIdentityResponse = serde_json::from_str(json).unwrap();
        assert_eq!(identity.user.id, "U0G9QF9C6");
        assert_eq!(identity.user.email, "sonny@captain-fabian.com");
        assert_eq!(identity.team.domain, "captain-fabian");
        assert!(identity.team.image_default);
        assert_eq!(identity.team.image_230, "");
    }

    #[test]
    fn test_identity_null_fields() {
        let json = r#"{
            "user": {"id": "U1", "email": null, "image_512": null},
            "team": {"id": "T1", "image_default": null, "domain": null}
        }"#;
        let identity: UserIdentityResponse = serde_json::from_str(json).unwrap();
        assert_eq!(identity.user.email, "");
        assert!(!identity.team.image_default);
        assert_eq!(identity.team.domain, "");
    }

    #[test]
    fn test_billable_info_lookup() {
        let json = r#"{"billable_info": {
            "U02UCPE1R": {"billing_active": true},
            "U02UEBSD2": {"billing_active": true},
            "U02UCPF2T": {"billing_active": false}
        }}"#;
        let info: BillableInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.is_billing_active("U02UCPE1R"), Some(true));
        assert_eq!(info.is_billing_active("U02UCPF2T"), Some(false));
        assert_eq!(info.is_billing_active("U999"), None);
        assert_eq!(info.active_count(), 2);
    }

    #[test]
    fn test_team_info_icon_map() {
        let json = r#"{
            "id": "T12345",
            "name": "My Team",
            "domain": "example",
            "email_domain": "example.com",
            "icon": {"image_34": "https://example.com/34.png", "image_default": true}
        }"#;
        let team: TeamInfo = serde_json::from_str(json).unwrap();
        assert_eq!(team.email_domain, "example.com");
        assert_eq!(
            team.icon.get("image_34").and_then(|v| v.as_str()),
            Some("https://example.com/34.png")
        );
        assert_eq!(team.icon.get("image_default"), Some(&serde_json::json!(true)));
    }
}
