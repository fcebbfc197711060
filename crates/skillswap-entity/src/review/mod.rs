//! Review aggregate.

pub mod model;

pub use model::{CreateReview, Review, UpdateReview};
