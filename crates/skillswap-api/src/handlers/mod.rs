//! HTTP request handlers, one module per domain.

pub mod auth;
pub mod credit;
pub mod health;
pub mod notification;
pub mod review;
pub mod skill;
pub mod swap;
pub mod user;
