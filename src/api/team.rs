//! `team.*` methods

use serde::Deserialize;

use super::client::SlackClient;
use crate::error::SlackError;
use crate::models::{BillableInfo, TeamInfo};

#[derive(Deserialize)]
struct TeamInfoResponse {
    team: TeamInfo,
}

impl SlackClient {
    /// Billing state of a single user.
    pub async fn get_billable_info(&self, user: &str) -> Result<BillableInfo, SlackError> {
        let params = self.params().set("user", user);
        self.call("team.billableInfo", params).await
    }

    /// Billing state of every user in the workspace.
    pub async fn get_billable_info_for_team(&self) -> Result<BillableInfo, SlackError> {
        self.call("team.billableInfo", self.params()).await
    }

    pub async fn get_team_info(&self) -> Result<TeamInfo, SlackError> {
        let resp: TeamInfoResponse = self.call("team.info", self.params()).await?;
        Ok(resp.team)
    }
}
