use crate::models::{MatchScore, MutualSkills, Proficiency, ScoringWeights, User};
use std::collections::{HashMap, HashSet};

/// Minimum bio length (in characters) that counts towards profile completeness
const MIN_BIO_LEN: usize = 20;

/// Completeness needed before the profile is called out in the reasons
const COMPLETE_PROFILE_FIELDS: u32 = 3;

/// Calculate a match score (0-100) for `candidate` from the point of view of `subject`
///
/// Scoring is additive and clamped once at the end:
/// ```text
/// score = teaching_match  * |candidate teaches what subject learns|
///       + learning_match  * |subject teaches what candidate learns|
///       + multiple_teaching / multiple_learning   (more than one match)
///       + same_location | nearby_location
///       + shared_category * |shared categories|
///       + profile_field   * |completed candidate fields|
///       + skill_level     * |teaching matches where subject < candidate|
/// ```
///
/// The result is not symmetric: swapping the users swaps the teaching and
/// learning roles.
pub fn calculate_match_score(
    subject: &User,
    candidate: &User,
    weights: &ScoringWeights,
) -> MatchScore {
    let mut score: i64 = 0;
    let mut reasons = Vec::new();

    // Stage 1: reciprocal skills
    let teaching = intersect(&subject.learning_skills(), &candidate.teaching_skills());
    let learning = intersect(&subject.teaching_skills(), &candidate.learning_skills());

    score += points(weights.teaching_match) * teaching.len() as i64;
    score += points(weights.learning_match) * learning.len() as i64;

    if !teaching.is_empty() {
        reasons.push(format!("Can teach you: {}", teaching.join(", ")));
    }
    if !learning.is_empty() {
        reasons.push(format!("Wants to learn: {}", learning.join(", ")));
    }

    if teaching.len() > 1 {
        score += points(weights.multiple_teaching);
        reasons.push("Multiple teaching skills match!".to_string());
    }
    if learning.len() > 1 {
        score += points(weights.multiple_learning);
        reasons.push("Multiple learning interests match!".to_string());
    }

    // Stage 2: location
    match location_proximity(subject, candidate) {
        Some(Proximity::Same) => {
            score += points(weights.same_location);
            reasons.push("Same location - easy to meet up!".to_string());
        }
        Some(Proximity::Nearby) => {
            score += points(weights.nearby_location);
            reasons.push("Nearby location".to_string());
        }
        None => {}
    }

    // Stage 3: category diversity
    let shared = shared_categories(subject, candidate);
    if !shared.is_empty() {
        score += points(weights.shared_category) * shared.len() as i64;
        reasons.push(format!("Shared interests in: {}", shared.join(", ")));
    }

    // Stage 4: candidate profile completeness
    let completeness = profile_completeness(candidate);
    score += points(weights.profile_field) * i64::from(completeness);
    if completeness >= COMPLETE_PROFILE_FIELDS {
        reasons.push("Complete profile - easy to connect!".to_string());
    }

    // Stage 5: skill level complementarity
    let level_matches = skill_level_matches(subject, candidate, &teaching);
    if level_matches > 0 {
        score += points(weights.skill_level) * level_matches as i64;
        reasons.push("Great skill level match!".to_string());
    }

    MatchScore {
        user: candidate.clone(),
        score: clamp_score(score),
        reasons,
        mutual_skills: MutualSkills { teaching, learning },
    }
}

/// How close two users live, judged on free-text locations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proximity {
    Same,
    Nearby,
}

/// Compare locations when both users have one.
///
/// Equal (case-insensitive) strings are `Same`. Otherwise the part of either
/// location before its first comma must appear inside the other location.
pub fn location_proximity(subject: &User, candidate: &User) -> Option<Proximity> {
    let ours = subject.location()?.to_lowercase();
    let theirs = candidate.location()?.to_lowercase();

    if ours == theirs {
        return Some(Proximity::Same);
    }

    if ours.contains(leading_segment(&theirs)) || theirs.contains(leading_segment(&ours)) {
        return Some(Proximity::Nearby);
    }

    None
}

#[inline]
fn leading_segment(location: &str) -> &str {
    location.split(',').next().unwrap_or(location)
}

/// Categories present on both profiles, in the subject's order
pub fn shared_categories(subject: &User, candidate: &User) -> Vec<String> {
    let theirs: HashSet<&str> = candidate
        .skills
        .iter()
        .map(|skill| skill.category.as_str())
        .collect();

    let mut seen = HashSet::new();
    subject
        .skills
        .iter()
        .map(|skill| skill.category.as_str())
        .filter(|category| seen.insert(*category) && theirs.contains(category))
        .map(str::to_string)
        .collect()
}

/// Number of filled-in profile fields (0-4)
pub fn profile_completeness(user: &User) -> u32 {
    [
        user.bio.encode_utf16().count() > MIN_BIO_LEN,
        user.has_profile_picture(),
        user.location().is_some(),
        user.has_phone(),
    ]
    .iter()
    .filter(|present| **present)
    .count() as u32
}

/// Count teaching matches where the subject is less experienced than the candidate
fn skill_level_matches(subject: &User, candidate: &User, teaching: &[String]) -> usize {
    let ours = skill_levels(subject);
    let theirs = skill_levels(candidate);

    teaching
        .iter()
        .filter(|name| match (ours.get(name.as_str()), theirs.get(name.as_str())) {
            (Some(own), Some(other)) => own.is_below(other),
            _ => false,
        })
        .count()
}

/// Lower-cased skill name to level; later entries overwrite earlier ones
fn skill_levels(user: &User) -> HashMap<String, &Proficiency> {
    user.skills
        .iter()
        .map(|skill| (skill.key(), &skill.proficiency_level))
        .collect()
}

/// Entries of `wanted` that appear in `offered`, keeping order and duplicates
fn intersect(wanted: &[String], offered: &[String]) -> Vec<String> {
    let offered: HashSet<&str> = offered.iter().map(String::as_str).collect();
    wanted
        .iter()
        .filter(|name| offered.contains(name.as_str()))
        .cloned()
        .collect()
}

#[inline]
fn points(weight: u32) -> i64 {
    i64::from(weight)
}

#[inline]
fn clamp_score(score: i64) -> u8 {
    score.min(100).max(0) as u8
}
