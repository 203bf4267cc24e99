// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{MatchScore, MutualSkills, Proficiency, ScoringWeights, Skill, User};
pub use requests::{AddCatalogSkillRequest, CatalogQuery, DirectorySearchRequest, QualityQuery, ScoreMatchRequest, TopMatchesRequest};
pub use responses::{CatalogResponse, DirectorySearchResponse, ErrorResponse, HealthResponse, RankedMatch, TopMatchesResponse};
