//! Review lifecycle and its reputation side effects.

pub mod service;

pub use service::{NewReview, ReviewService};
