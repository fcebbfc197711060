//! Skill CRUD.

pub mod service;

pub use service::SkillService;
