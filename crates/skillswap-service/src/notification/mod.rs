//! Notification listing and fan-out.

pub mod service;

pub use service::NotificationService;
