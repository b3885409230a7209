pub mod chat;
pub mod health_check;
