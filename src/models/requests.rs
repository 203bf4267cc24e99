use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::User;

/// Request to score one candidate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreMatchRequest {
    #[validate(custom(function = "validate_user_id"))]
    pub subject: User,
    #[validate(custom(function = "validate_user_id"))]
    pub candidate: User,
}

/// Request to rank a candidate pool
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TopMatchesRequest {
    #[validate(custom(function = "validate_user_id"))]
    pub subject: User,
    #[serde(default)]
    pub candidates: Vec<User>,
    /// Signed so that negative limits reach the contract check instead of
    /// failing as a JSON type error
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Query for the quality endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityQuery {
    pub score: i64,
}

/// Request to filter the browse directory
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DirectorySearchRequest {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(rename = "searchTerm", alias = "search_term", default)]
    #[validate(length(max = 200))]
    pub search_term: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Query for the catalog listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
}

/// Request to add a custom skill to the catalog
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddCatalogSkillRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

fn validate_user_id(user: &User) -> Result<(), validator::ValidationError> {
    if user.id.trim().is_empty() {
        return Err(validator::ValidationError::new("empty_user_id"));
    }
    Ok(())
}
