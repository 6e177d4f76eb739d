use crate::{
    error::DispatchError,
    schema::{MessageRequest, Payload, RobotResponse, SendResult},
};
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, error, info};
use url::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct DingTalkClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl DingTalkClient {
    pub fn new(client: reqwest::Client) -> Self {
        DingTalkClient {
            client,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Posts the message and classifies the outcome.
    ///
    /// Failures never surface as `Err`: transport and decoding errors yield a
    /// result without `data`, application-level rejections carry the raw body.
    pub async fn send_message(&self, request: &MessageRequest) -> SendResult {
        let payload = Payload::from_request(request);

        debug!(
            "Sending {} message to DingTalk robot at {}",
            payload.msgtype(),
            request.url.path()
        );

        let body = match self.post(&request.url, &payload).await {
            Ok(body) => body,
            Err(e) => {
                error!("Failed to reach DingTalk robot: {e}");
                return SendResult::failed(&e);
            }
        };

        let response = match RobotResponse::from_body(&body) {
            Ok(response) => response,
            Err(e) => {
                error!("Unexpected DingTalk response {body}: {e}");
                return SendResult::failed(&e);
            }
        };

        if response.is_ok() {
            info!("DingTalk message sent");
            return SendResult::sent(body);
        }

        let errmsg = response.errmsg.as_deref().unwrap_or("unknown error");
        error!(
            "DingTalk rejected the message (errcode {:?}): {errmsg}",
            response.errcode
        );
        SendResult::rejected(errmsg, body)
    }

    async fn post(
        &self,
        url: &Url,
        payload: &Payload,
    ) -> Result<serde_json::Value, DispatchError> {
        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .timeout(self.timeout)
            .json(payload)
            .send()
            .await?
            .error_for_status()?;

        let bytes = response.bytes().await?;

        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Validates the raw arguments and sends one message.
///
/// Invalid input is returned as `Err` before any request is made; every other
/// outcome is reported through the [`SendResult`].
pub async fn send_dingtalk_message(
    client: &DingTalkClient,
    url: &str,
    content: &str,
    msgtype: &str,
    at_mobiles: &[String],
    at_all: bool,
) -> Result<SendResult, DispatchError> {
    let request = MessageRequest::new(url, content, msgtype)?
        .with_at_mobiles(at_mobiles.iter().cloned())
        .with_at_all(at_all);

    Ok(client.send_message(&request).await)
}
