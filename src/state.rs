use crate::config::Config;
use crate::domain::ports::{
    BookingGateway, CalendarProvider, ConversationProvider, ServiceDirectory,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub calendar: Arc<dyn CalendarProvider>,
    pub services: Arc<dyn ServiceDirectory>,
    pub bookings: Arc<dyn BookingGateway>,
    pub conversations: Arc<dyn ConversationProvider>,
}
