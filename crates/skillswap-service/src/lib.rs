//! # skillswap-service
//!
//! Business logic services for Skill Swap. Each service owns the
//! repositories and collaborators it needs; the swap service is the
//! lifecycle core that fans out notifications, credit awards, and
//! reputation recomputation on state transitions.

pub mod auth;
pub mod context;
pub mod credit;
pub mod meeting;
pub mod notification;
pub mod reputation;
pub mod review;
pub mod skill;
pub mod swap;
pub mod user;

pub use context::RequestContext;
