use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// The message type has no payload shape
    #[error("unsupported message type: {0}")]
    UnsupportedMessageType(String),

    #[error("webhook URL must not be empty")]
    EmptyUrl,

    #[error("invalid webhook URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Network failure, timeout or non-2xx status
    #[error("request error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("unexpected error: {0}")]
    Unexpected(#[from] serde_json::Error),

    /// A 2xx body that is JSON but not an object
    #[error("unexpected error: response body is a JSON {0}, expected an object")]
    UnexpectedBody(&'static str),
}

// The webhook URL carries the access token, keep it out of messages and logs
impl From<reqwest::Error> for DispatchError {
    fn from(e: reqwest::Error) -> Self {
        DispatchError::Transport(e.without_url())
    }
}
