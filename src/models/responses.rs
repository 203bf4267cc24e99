use serde::{Deserialize, Serialize};

use crate::core::quality::MatchQuality;
use crate::models::domain::{MatchScore, User};
use crate::services::catalog::CatalogSkill;

/// A ranked match together with its presentation tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    #[serde(flatten)]
    pub result: MatchScore,
    pub quality: MatchQuality,
}

/// Response for the top matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopMatchesResponse {
    pub matches: Vec<RankedMatch>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    pub limit: usize,
}

/// Response for the directory search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectorySearchResponse {
    pub users: Vec<User>,
    pub categories: Vec<String>,
    pub total: usize,
}

/// Response for the catalog listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub skills: Vec<CatalogSkill>,
    pub categories: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
