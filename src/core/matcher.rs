use crate::core::scoring::calculate_match_score;
use crate::models::{MatchScore, ScoringWeights, User};

/// Result of the ranking process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<MatchScore>,
    pub total_candidates: usize,
}

/// Ranking orchestrator
///
/// # Pipeline Stages
/// 1. Self-exclusion by user id
/// 2. Pairwise scoring
/// 3. Zero-score removal
/// 4. Stable sort by descending score (ties keep candidate order)
/// 5. Truncation to the requested limit
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a single candidate against `subject`
    pub fn score(&self, subject: &User, candidate: &User) -> MatchScore {
        calculate_match_score(subject, candidate, &self.weights)
    }

    /// Best `limit` partners for `subject`, highest score first
    ///
    /// # Arguments
    /// * `subject` - The user looking for partners
    /// * `candidates` - The candidate pool, may contain `subject` itself
    /// * `limit` - Maximum number of matches to return
    pub fn top_matches(&self, subject: &User, candidates: &[User], limit: usize) -> Vec<MatchScore> {
        if limit == 0 {
            return Vec::new();
        }

        let mut scored: Vec<MatchScore> = candidates
            .iter()
            .filter(|candidate| candidate.id != subject.id)
            .map(|candidate| self.score(subject, candidate))
            .filter(|result| result.score > 0)
            .collect();

        // `sort_by` is stable, equal scores stay in candidate order
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(limit);

        tracing::trace!(
            subject = %subject.id,
            candidates = candidates.len(),
            returned = scored.len(),
            "ranked candidates"
        );

        scored
    }

    /// Same as [`Matcher::top_matches`], also reporting the pool size
    pub fn find_matches(&self, subject: &User, candidates: &[User], limit: usize) -> MatchResult {
        MatchResult {
            matches: self.top_matches(subject, candidates, limit),
            total_candidates: candidates.len(),
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
