pub mod common;
pub mod notification;
