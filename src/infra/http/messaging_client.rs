use crate::domain::models::conversation::ChatMessage;
use crate::domain::ports::ConversationProvider;
use crate::error::WizardError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

pub struct HttpMessagingClient {
    client: Client,
    base_url: String,
}

impl HttpMessagingClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[derive(Deserialize)]
struct MessagesPayload {
    success: bool,
    #[serde(default)]
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct TypingPayload {
    success: bool,
    #[serde(default)]
    typing: bool,
}

#[async_trait]
impl ConversationProvider for HttpMessagingClient {
    async fn fetch_messages(
        &self,
        conversation_id: &str,
        after: Option<DateTime<Utc>>,
    ) -> Result<Vec<ChatMessage>, WizardError> {
        let url = format!(
            "{}/api/v1/conversations/{}/messages",
            self.base_url, conversation_id
        );
        let mut req = self.client.get(&url);
        if let Some(after) = after {
            req = req.query(&[("after", after.to_rfc3339())]);
        }

        let res = req.send().await?;
        if !res.status().is_success() {
            return Err(WizardError::Api {
                status: res.status().as_u16(),
                message: res.text().await.unwrap_or_default(),
            });
        }

        let payload: MessagesPayload = res.json().await?;
        if !payload.success {
            return Err(WizardError::Api {
                status: 200,
                message: "message lookup reported failure".to_string(),
            });
        }
        Ok(payload.messages)
    }

    async fn fetch_typing(&self, conversation_id: &str) -> Result<bool, WizardError> {
        let url = format!(
            "{}/api/v1/conversations/{}/typing",
            self.base_url, conversation_id
        );
        let res = self.client.get(&url).send().await?;
        if !res.status().is_success() {
            return Err(WizardError::Api {
                status: res.status().as_u16(),
                message: res.text().await.unwrap_or_default(),
            });
        }

        let payload: TypingPayload = res.json().await?;
        if !payload.success {
            return Err(WizardError::Api {
                status: 200,
                message: "typing lookup reported failure".to_string(),
            });
        }
        Ok(payload.typing)
    }
}
