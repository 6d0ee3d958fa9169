pub mod availability;
pub mod conversation;
pub mod wizard;
