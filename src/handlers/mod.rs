pub mod health;
pub mod notification;
