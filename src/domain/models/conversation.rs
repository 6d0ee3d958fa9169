use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub sender: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}
