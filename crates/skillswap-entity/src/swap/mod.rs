//! Swap-request aggregate: the central record of a proposed skill
//! exchange, its scheduled session, and its message thread.

pub mod message;
pub mod model;
pub mod session;
pub mod status;

pub use message::{CreateMessage, Message};
pub use model::{CreateSwapRequest, SwapFormat, SwapPriority, SwapRequest};
pub use session::{ScheduledSession, UpsertSession};
pub use status::SwapStatus;
