//! Skill entity models.
//!
//! A user lists skills they can teach (`SkillOffered`) and skills they
//! want to learn (`SkillWanted`). Both are plain owned rows; swap
//! requests reference skills by name, not by row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Proficiency level for an offered skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "skill_level", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    /// Just getting started.
    Beginner,
    /// Comfortable with the fundamentals.
    Intermediate,
    /// Can teach non-trivial material.
    Advanced,
    /// Professional-grade mastery.
    Expert,
}

impl SkillLevel {
    /// Return the level as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SkillLevel {
    type Err = skillswap_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            "expert" => Ok(Self::Expert),
            _ => Err(skillswap_core::AppError::validation(format!(
                "Invalid skill level: '{s}'. Expected one of: beginner, intermediate, advanced, expert"
            ))),
        }
    }
}

/// How urgently a user wants to learn a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "skill_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SkillPriority {
    /// Nice to have.
    Low,
    /// Actively looking.
    Medium,
    /// Top of the wish list.
    High,
}

impl SkillPriority {
    /// Return the priority as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for SkillPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SkillPriority {
    type Err = skillswap_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(skillswap_core::AppError::validation(format!(
                "Invalid skill priority: '{s}'. Expected one of: low, medium, high"
            ))),
        }
    }
}

/// A skill a user offers to teach.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillOffered {
    /// Unique identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Skill name, e.g. "Guitar".
    pub name: String,
    /// Free-form category, e.g. "Music".
    pub category: String,
    /// Proficiency level.
    pub level: SkillLevel,
    /// Optional longer description.
    pub description: Option<String>,
    /// When the skill was added.
    pub created_at: DateTime<Utc>,
}

/// A skill a user wants to learn.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillWanted {
    /// Unique identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Skill name, e.g. "Spanish".
    pub name: String,
    /// Free-form category, e.g. "Languages".
    pub category: String,
    /// How urgently the user wants it.
    pub priority: SkillPriority,
    /// When the skill was added.
    pub created_at: DateTime<Utc>,
}

/// Data to create an offered skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSkillOffered {
    /// Owning user.
    pub user_id: Uuid,
    /// Skill name.
    pub name: String,
    /// Category.
    pub category: String,
    /// Proficiency level.
    pub level: SkillLevel,
    /// Optional description.
    pub description: Option<String>,
}

/// Data to create a wanted skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSkillWanted {
    /// Owning user.
    pub user_id: Uuid,
    /// Skill name.
    pub name: String,
    /// Category.
    pub category: String,
    /// Priority.
    pub priority: SkillPriority,
}
