use crate::{error::DispatchError, util::truncate_chars};
use serde::Serialize;
use serde_json::Value;
use std::{fmt::Display, str::FromStr};
use url::Url;

/// Markdown messages need a title for the chat notification preview
pub const MARKDOWN_TITLE_CHARS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    Text,
    Markdown,
}

impl FromStr for MessageType {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(MessageType::Text),
            "markdown" => Ok(MessageType::Markdown),
            other => Err(DispatchError::UnsupportedMessageType(other.to_string())),
        }
    }
}

impl Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageType::Text => write!(f, "text"),
            MessageType::Markdown => write!(f, "markdown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRequest {
    pub url: Url,
    pub content: String,
    pub msgtype: MessageType,
    pub at_mobiles: Vec<String>,
    pub at_all: bool,
}

impl MessageRequest {
    pub fn new(
        url: &str,
        content: impl Into<String>,
        msgtype: &str,
    ) -> Result<Self, DispatchError> {
        let msgtype = msgtype.parse()?;

        if url.trim().is_empty() {
            return Err(DispatchError::EmptyUrl);
        }
        let url = Url::parse(url)?;

        Ok(MessageRequest {
            url,
            content: content.into(),
            msgtype,
            at_mobiles: Vec::new(),
            at_all: false,
        })
    }

    #[must_use]
    pub fn with_at_mobiles(mut self, at_mobiles: impl IntoIterator<Item = String>) -> Self {
        self.at_mobiles = at_mobiles.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_at_all(mut self, at_all: bool) -> Self {
        self.at_all = at_all;
        self
    }
}

/// Request body accepted by the robot `send` endpoint
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Payload {
    #[serde(flatten)]
    pub body: Body,
    pub at: At,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "msgtype", rename_all = "lowercase")]
pub enum Body {
    Text { text: Text },
    Markdown { markdown: Markdown },
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Text {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Markdown {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct At {
    pub at_mobiles: Vec<String>,
    pub is_at_all: bool,
}

impl Payload {
    pub fn from_request(request: &MessageRequest) -> Self {
        let body = match request.msgtype {
            MessageType::Text => Body::Text {
                text: Text {
                    content: request.content.clone(),
                },
            },
            MessageType::Markdown => Body::Markdown {
                markdown: Markdown {
                    title: truncate_chars(&request.content, MARKDOWN_TITLE_CHARS).to_string(),
                    text: request.content.clone(),
                },
            },
        };

        Payload {
            body,
            at: At {
                at_mobiles: request.at_mobiles.clone(),
                is_at_all: request.at_all,
            },
        }
    }

    pub fn msgtype(&self) -> MessageType {
        match self.body {
            Body::Text { .. } => MessageType::Text,
            Body::Markdown { .. } => MessageType::Markdown,
        }
    }
}

/// Application-level status inside a 2xx response
///
/// Fields are read loosely: any object is a valid response, and an `errcode`
/// other than the integer `0` is a rejection.
#[derive(Debug, Clone, PartialEq)]
pub struct RobotResponse {
    pub errcode: Option<Value>,
    pub errmsg: Option<String>,
}

impl RobotResponse {
    pub fn from_body(body: &Value) -> Result<Self, DispatchError> {
        let Value::Object(fields) = body else {
            return Err(DispatchError::UnexpectedBody(json_kind(body)));
        };

        let errmsg = match fields.get("errmsg") {
            None | Some(Value::Null) => None,
            Some(Value::String(errmsg)) => Some(errmsg.clone()),
            Some(other) => Some(other.to_string()),
        };

        Ok(RobotResponse {
            errcode: fields.get("errcode").cloned(),
            errmsg,
        })
    }

    pub fn is_ok(&self) -> bool {
        self.errcode.as_ref().and_then(Value::as_i64) == Some(0)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Uniform outcome of a send attempt
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SendResult {
    pub success: bool,
    pub message: String,
    pub data: Option<Value>,
}

impl SendResult {
    pub fn sent(data: Value) -> Self {
        SendResult {
            success: true,
            message: "sent".to_string(),
            data: Some(data),
        }
    }

    pub fn rejected(errmsg: &str, data: Value) -> Self {
        SendResult {
            success: false,
            message: format!("send failed: {errmsg}"),
            data: Some(data),
        }
    }

    pub fn failed(error: &DispatchError) -> Self {
        SendResult {
            success: false,
            message: error.to_string(),
            data: None,
        }
    }
}
