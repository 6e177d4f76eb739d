use anyhow::{Result, bail};
use clap::Parser;
use dingtalk_notify::{DingTalkClient, MessageRequest, config::AppConfig, util::setup_tracing};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // load .env file
    setup_tracing();

    let config = AppConfig::parse();

    let request = MessageRequest {
        url: config.webhook_url.clone(),
        content: config.content.clone(),
        msgtype: config.msgtype,
        at_mobiles: config.at_mobiles.clone(),
        at_all: config.at_all,
    };

    let dingtalk_client =
        DingTalkClient::new(reqwest::Client::new()).with_timeout(config.timeout());

    let result = dingtalk_client.send_message(&request).await;

    info!("Result: {}", serde_json::to_string(&result)?);

    if !result.success {
        bail!("{}", result.message);
    }

    Ok(())
}
