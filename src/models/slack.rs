use serde::{Deserialize, Serialize};

use crate::models::message::MessageAttachment;

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub channel: String,
    pub text: String,
    pub attachments: Vec<MessageAttachment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub ok: bool,
    pub error: Option<String>,
}
