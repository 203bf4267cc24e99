// Core algorithm exports
pub mod error;
pub mod filters;
pub mod matcher;
pub mod quality;
pub mod scoring;

pub use error::{checked_limit, MatchError};
pub use filters::{directory_categories, filter_directory, matches_category, matches_search};
pub use matcher::{MatchResult, Matcher};
pub use quality::{classify, MatchQuality, QualityLevel};
pub use scoring::calculate_match_score;
