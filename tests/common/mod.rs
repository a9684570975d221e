use httpmock::MockServer;
use slack_users::{ClientConfig, SlackClient};

pub const TEST_TOKEN: &str = "xoxp-test";

/// Client with [`TEST_TOKEN`] pointed at `server`.
pub fn client_for(server: &MockServer) -> SlackClient {
    let config = ClientConfig::new(TEST_TOKEN).with_base_url(server.base_url());
    SlackClient::new(config).expect("valid test config")
}
