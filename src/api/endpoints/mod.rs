//! API endpoint handlers, one module per resource.

pub mod chat;
pub mod health;
pub mod reminders;
pub mod vitals;
