//! Skill aggregate: offered and wanted skills plus their enums.

pub mod model;

pub use model::{
    CreateSkillOffered, CreateSkillWanted, SkillLevel, SkillOffered, SkillPriority, SkillWanted,
};
