use crate::schema::MessageType;
use clap::Parser;
use std::time::Duration;
use url::Url;

/// Send a message to a DingTalk group robot
#[derive(Clone, Debug, Parser)]
pub struct AppConfig {
    /// Message content
    pub content: String,

    /// Robot webhook, including the `access_token` query parameter
    #[arg(long, env = "DINGTALK_WEBHOOK_URL")]
    pub webhook_url: Url,

    #[arg(long, env = "DINGTALK_MSGTYPE", default_value = "text")]
    pub msgtype: MessageType,

    /// Phone numbers of group members to mention
    #[arg(
        long,
        env = "DINGTALK_AT_MOBILES",
        num_args=1..,
        value_delimiter = ','
    )]
    pub at_mobiles: Vec<String>,

    /// Mention everyone in the group
    #[arg(long, env = "DINGTALK_AT_ALL")]
    pub at_all: bool,

    #[arg(long, env = "DINGTALK_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,
}

impl AppConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
