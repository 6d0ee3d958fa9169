pub mod availability;
pub mod booking;
pub mod conversation;
pub mod service;
