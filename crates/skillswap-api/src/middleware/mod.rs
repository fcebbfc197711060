//! HTTP middleware builders.

pub mod cors;
