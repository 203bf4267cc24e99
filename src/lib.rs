//! SkillSwap Match - match scoring and ranking for the SkillSwap skill-exchange directory
//!
//! This library scores how well two users complement each other (who can teach
//! whom), ranks a candidate pool into a top-N list, and maps scores to
//! presentation tiers. The engine in [`core`] is pure and synchronous; the
//! HTTP layer in [`routes`] and the timing recorder in [`services`] sit
//! around it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, classify, MatchError, MatchQuality, Matcher, QualityLevel};
pub use crate::models::{MatchScore, MutualSkills, Proficiency, ScoringWeights, Skill, User};
