//! Credit ledger operations.

pub mod service;

pub use service::CreditService;
