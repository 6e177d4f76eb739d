//! Post notifications to a DingTalk group robot webhook.

pub mod config;
pub mod dingtalk;
pub mod error;
pub mod schema;
pub mod util;

pub use dingtalk::{DingTalkClient, send_dingtalk_message};
pub use error::DispatchError;
pub use schema::{MessageRequest, MessageType, SendResult};
