use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::{checked_limit, classify, Matcher, MatchError};
use crate::core::filters::{directory_categories, filter_directory};
use crate::models::{
    AddCatalogSkillRequest, CatalogQuery, CatalogResponse, DirectorySearchRequest,
    DirectorySearchResponse, ErrorResponse, HealthResponse, MatchScore, QualityQuery,
    RankedMatch, ScoreMatchRequest, TopMatchesRequest, TopMatchesResponse,
};
use crate::services::{metadata, CatalogSkill, PerformanceLogger, SkillCatalog};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub catalog: Arc<RwLock<SkillCatalog>>,
    pub metrics: Arc<PerformanceLogger>,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/score", web::post().to(score_match))
        .route("/matches/top", web::post().to(top_matches))
        .route("/matches/quality", web::get().to(match_quality))
        .route("/directory/search", web::post().to(directory_search))
        .route("/skills/catalog", web::get().to(list_catalog))
        .route("/skills/catalog", web::post().to(add_catalog_skill))
        .route("/metrics", web::get().to(metrics_summary));
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

fn ranked(result: MatchScore) -> RankedMatch {
    let quality = classify(i64::from(result.score));
    RankedMatch { result, quality }
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score a single candidate
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "subject": { "id": "string", "name": "string", "skills": [] },
///   "candidate": { "id": "string", "name": "string", "skills": [] }
/// }
/// ```
async fn score_match(
    state: web::Data<AppState>,
    req: web::Json<ScoreMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for score request: {}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let req = req.into_inner();
    let meta = metadata([
        ("currentUserId", json!(req.subject.id)),
        ("targetUserId", json!(req.candidate.id)),
        ("currentUserSkillsCount", json!(req.subject.skills.len())),
        ("targetUserSkillsCount", json!(req.candidate.skills.len())),
    ]);

    let result = state
        .metrics
        .measure("calculateMatchScore", meta, || state.matcher.score(&req.subject, &req.candidate));

    tracing::debug!(
        "Scored {} against {}: {}",
        req.subject.id,
        req.candidate.id,
        result.score
    );

    HttpResponse::Ok().json(ranked(result))
}

/// Rank a candidate pool
///
/// POST /api/v1/matches/top
///
/// Request body:
/// ```json
/// {
///   "subject": { "id": "string", "name": "string", "skills": [] },
///   "candidates": [],
///   "limit": 10
/// }
/// ```
async fn top_matches(
    state: web::Data<AppState>,
    req: web::Json<TopMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for top matches request: {}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let req = req.into_inner();
    let requested = req.limit.unwrap_or(state.matching.default_limit as i64);
    let meta = metadata([
        ("currentUserId", json!(req.subject.id)),
        ("totalUsers", json!(req.candidates.len())),
        ("limit", json!(requested)),
    ]);

    let outcome = state.metrics.try_measure("getTopMatches", meta, || {
        let limit = checked_limit(requested, state.matching.max_limit)?;
        if (limit as i64) < requested {
            tracing::debug!(requested, limit, "Capping requested limit");
        }
        let result = state.matcher.find_matches(&req.subject, &req.candidates, limit);
        Ok::<_, MatchError>((limit, result))
    });

    match outcome {
        Ok((limit, result)) => {
            tracing::info!(
                "Returning {} matches for user {} (from {} candidates)",
                result.matches.len(),
                req.subject.id,
                result.total_candidates
            );

            HttpResponse::Ok().json(TopMatchesResponse {
                matches: result.matches.into_iter().map(ranked).collect(),
                total_candidates: result.total_candidates,
                limit,
            })
        }
        Err(e) => {
            tracing::info!("Rejected top matches request for {}: {}", req.subject.id, e);
            bad_request("Invalid limit", e.to_string())
        }
    }
}

/// Quality tier for a score
///
/// GET /api/v1/matches/quality?score={score}
async fn match_quality(query: web::Query<QualityQuery>) -> impl Responder {
    HttpResponse::Ok().json(classify(query.score))
}

/// Filter the browse directory
///
/// POST /api/v1/directory/search
async fn directory_search(req: web::Json<DirectorySearchRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    let users: Vec<_> = filter_directory(&req.users, &req.search_term, req.category.as_deref())
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(
        "Directory search '{}' kept {} of {} users",
        req.search_term,
        users.len(),
        req.users.len()
    );

    HttpResponse::Ok().json(DirectorySearchResponse {
        total: users.len(),
        categories: directory_categories(&req.users),
        users,
    })
}

/// List selectable skills
///
/// GET /api/v1/skills/catalog?category={category}
async fn list_catalog(
    state: web::Data<AppState>,
    query: web::Query<CatalogQuery>,
) -> impl Responder {
    let catalog = state.catalog.read().await;

    let skills: Vec<CatalogSkill> = match query.category.as_deref() {
        Some(category) => catalog.by_category(category).into_iter().cloned().collect(),
        None => catalog.entries().to_vec(),
    };

    HttpResponse::Ok().json(CatalogResponse {
        skills,
        categories: catalog.categories(),
    })
}

/// Add a custom skill to the catalog
///
/// POST /api/v1/skills/catalog
async fn add_catalog_skill(
    state: web::Data<AppState>,
    req: web::Json<AddCatalogSkillRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    let mut catalog = state.catalog.write().await;
    match catalog.add_custom(&req.name) {
        Ok((skill, true)) => {
            tracing::info!("Catalog skill added: {}", skill.name);
            HttpResponse::Created().json(skill)
        }
        Ok((skill, false)) => HttpResponse::Ok().json(skill),
        Err(e) => bad_request("Invalid skill", e.to_string()),
    }
}

/// Per-operation timing statistics
///
/// GET /api/v1/metrics
async fn metrics_summary(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.metrics.summary())
}
