//! Credit aggregate: per-user balance and the append-only ledger.

pub mod model;

pub use model::{CreditBalance, CreditReason, CreditTransaction};
