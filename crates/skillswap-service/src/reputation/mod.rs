//! Reputation recomputation.

pub mod service;

pub use service::ReputationService;
