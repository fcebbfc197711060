//! Repository implementations for all Skill Swap entities.

pub mod credit;
pub mod notification;
pub mod reputation;
pub mod review;
pub mod skill;
pub mod swap;
pub mod user;

pub use credit::CreditRepository;
pub use notification::NotificationRepository;
pub use reputation::ReputationRepository;
pub use review::ReviewRepository;
pub use skill::SkillRepository;
pub use swap::SwapRepository;
pub use user::UserRepository;
