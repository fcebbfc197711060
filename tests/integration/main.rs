//! Integration tests for the Skill Swap API.
//!
//! These tests drive the full router against a real PostgreSQL instance.
//! They are skipped (pass vacuously) unless `SKILLSWAP_TEST_DATABASE_URL`
//! is set.

mod helpers;

mod auth_test;
mod credit_test;
mod notification_test;
mod review_test;
mod swap_test;
