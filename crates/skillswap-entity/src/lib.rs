//! # skillswap-entity
//!
//! Domain entity models and enums for Skill Swap. Each module covers one
//! aggregate: users, skills, swap requests, reviews, reputation, credits,
//! and notifications.

pub mod credit;
pub mod notification;
pub mod reputation;
pub mod review;
pub mod skill;
pub mod swap;
pub mod user;
