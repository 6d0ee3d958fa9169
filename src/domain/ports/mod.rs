use crate::domain::models::{
    availability::AvailabilitySnapshot,
    booking::{BookingConfirmation, BookingRequest},
    conversation::ChatMessage,
    service::ServiceInfo,
};
use crate::error::WizardError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait CalendarProvider: Send + Sync {
    async fn fetch_snapshot(&self, church_id: &str) -> Result<AvailabilitySnapshot, WizardError>;
}

#[async_trait]
pub trait ServiceDirectory: Send + Sync {
    async fn fetch_service(&self, service_id: &str) -> Result<Option<ServiceInfo>, WizardError>;
}

#[async_trait]
pub trait BookingGateway: Send + Sync {
    async fn submit(
        &self,
        church_id: &str,
        request: &BookingRequest,
    ) -> Result<BookingConfirmation, WizardError>;
}

#[async_trait]
pub trait ConversationProvider: Send + Sync {
    async fn fetch_messages(
        &self,
        conversation_id: &str,
        after: Option<DateTime<Utc>>,
    ) -> Result<Vec<ChatMessage>, WizardError>;
    async fn fetch_typing(&self, conversation_id: &str) -> Result<bool, WizardError>;
}
