use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Self-reported proficiency for a skill.
///
/// Only `beginner`, `intermediate` and `expert` take part in level matching.
/// Any other text is kept verbatim as `Unranked` so that mistyped levels stay
/// visible instead of silently collapsing into one of the ranked tiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Expert,
    Unranked(String),
}

impl Proficiency {
    /// Position on the `beginner < intermediate < expert` ladder
    pub fn rank(&self) -> Option<u8> {
        match self {
            Proficiency::Beginner => Some(0),
            Proficiency::Intermediate => Some(1),
            Proficiency::Expert => Some(2),
            Proficiency::Unranked(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Proficiency::Beginner => "beginner",
            Proficiency::Intermediate => "intermediate",
            Proficiency::Expert => "expert",
            Proficiency::Unranked(raw) => raw,
        }
    }

    /// True when `self` sits strictly below `other` on the ladder.
    /// Unranked levels never compare.
    pub fn is_below(&self, other: &Proficiency) -> bool {
        match (self.rank(), other.rank()) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        }
    }
}

impl Default for Proficiency {
    fn default() -> Self {
        Proficiency::Unranked(String::new())
    }
}

impl From<String> for Proficiency {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "beginner" => Proficiency::Beginner,
            "intermediate" => Proficiency::Intermediate,
            "expert" => Proficiency::Expert,
            _ => Proficiency::Unranked(raw),
        }
    }
}

impl From<Option<String>> for Proficiency {
    fn from(raw: Option<String>) -> Self {
        raw.map(Proficiency::from).unwrap_or_default()
    }
}

impl From<&str> for Proficiency {
    fn from(raw: &str) -> Self {
        Proficiency::from(raw.to_string())
    }
}

impl From<Proficiency> for String {
    fn from(level: Proficiency) -> Self {
        match level {
            Proficiency::Unranked(raw) => raw,
            ranked => ranked.as_str().to_string(),
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A skill entry on a user's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(rename = "isOffering", alias = "is_offering", default)]
    pub is_offering: bool,
    #[serde(rename = "isLearning", alias = "is_learning", default)]
    pub is_learning: bool,
    #[serde(rename = "proficiencyLevel", alias = "proficiency_level", default)]
    pub proficiency_level: Proficiency,
}

impl Skill {
    /// Lower-cased name used for every comparison
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Directory user as handed over by the persistence layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bio: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(rename = "profilePicture", alias = "profile_picture", default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "createdAt", alias = "created_at", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub skills: Vec<Skill>,
}

impl User {
    /// Location if set and non-empty
    pub fn location(&self) -> Option<&str> {
        non_empty(self.location.as_deref())
    }

    pub fn has_profile_picture(&self) -> bool {
        non_empty(self.profile_picture.as_deref()).is_some()
    }

    pub fn has_phone(&self) -> bool {
        non_empty(self.phone.as_deref()).is_some()
    }

    /// Lower-cased names of skills the user can teach
    pub fn teaching_skills(&self) -> Vec<String> {
        self.skills
            .iter()
            .filter(|skill| skill.is_offering)
            .map(Skill::key)
            .collect()
    }

    /// Lower-cased names of skills the user wants to learn
    pub fn learning_skills(&self) -> Vec<String> {
        self.skills
            .iter()
            .filter(|skill| skill.is_learning)
            .map(Skill::key)
            .collect()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Nullable columns arrive as JSON `null`; treat them like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reciprocal skills between the subject and a candidate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutualSkills {
    /// Skills the candidate can teach the subject
    pub teaching: Vec<String>,
    /// Skills the subject can teach the candidate
    pub learning: Vec<String>,
}

/// Scored candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub user: User,
    pub score: u8,
    pub reasons: Vec<String>,
    #[serde(rename = "mutualSkills")]
    pub mutual_skills: MutualSkills,
}

/// Points awarded per scoring signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub teaching_match: u32,
    pub learning_match: u32,
    pub multiple_teaching: u32,
    pub multiple_learning: u32,
    pub same_location: u32,
    pub nearby_location: u32,
    pub shared_category: u32,
    pub profile_field: u32,
    pub skill_level: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            teaching_match: 30,
            learning_match: 25,
            multiple_teaching: 15,
            multiple_learning: 10,
            same_location: 20,
            nearby_location: 10,
            shared_category: 5,
            profile_field: 3,
            skill_level: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proficiency_parsing() {
        assert_eq!(Proficiency::from("beginner"), Proficiency::Beginner);
        assert_eq!(Proficiency::from("expert"), Proficiency::Expert);
        assert_eq!(
            Proficiency::from("Expert"),
            Proficiency::Unranked("Expert".to_string())
        );
        assert_eq!(Proficiency::from("guru").as_str(), "guru");
    }

    #[test]
    fn test_proficiency_ladder() {
        assert!(Proficiency::Beginner.is_below(&Proficiency::Intermediate));
        assert!(Proficiency::Beginner.is_below(&Proficiency::Expert));
        assert!(Proficiency::Intermediate.is_below(&Proficiency::Expert));
        assert!(!Proficiency::Expert.is_below(&Proficiency::Beginner));
        assert!(!Proficiency::Expert.is_below(&Proficiency::Expert));
        assert!(!Proficiency::from("novice").is_below(&Proficiency::Expert));
        assert!(!Proficiency::Beginner.is_below(&Proficiency::from("")));
    }

    #[test]
    fn test_skill_deserialize_snake_case() {
        let skill: Skill = serde_json::from_value(serde_json::json!({
            "id": "s1",
            "name": "Guitar",
            "category": "music",
            "is_offering": true,
            "is_learning": false,
            "proficiency_level": "expert"
        }))
        .unwrap();

        assert!(skill.is_offering);
        assert_eq!(skill.proficiency_level, Proficiency::Expert);
        assert_eq!(skill.key(), "guitar");
    }

    #[test]
    fn test_unranked_level_round_trips_raw_text() {
        let skill = Skill {
            id: "s1".to_string(),
            name: "Chess".to_string(),
            category: "games".to_string(),
            is_offering: true,
            is_learning: false,
            proficiency_level: Proficiency::from("grandmaster"),
        };

        let json = serde_json::to_value(&skill).unwrap();
        assert_eq!(json["proficiencyLevel"], "grandmaster");
    }

    #[test]
    fn test_user_requires_skills() {
        let result: Result<User, _> = serde_json::from_value(serde_json::json!({
            "id": "u1",
            "name": "No Skills Key"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_user_null_skills_rejected() {
        let result: Result<User, _> = serde_json::from_value(serde_json::json!({
            "id": "u1",
            "name": "Null Skills",
            "skills": null
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_null_text_fields_are_empty() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "u1",
            "name": "Alice",
            "bio": null,
            "email": null,
            "profilePicture": null,
            "skills": [{
                "name": "Guitar",
                "category": null,
                "isOffering": true,
                "proficiencyLevel": null
            }]
        }))
        .unwrap();

        assert_eq!(user.bio, "");
        assert_eq!(user.email, "");
        assert!(!user.has_profile_picture());
        assert_eq!(user.skills[0].category, "");
        assert_eq!(user.skills[0].proficiency_level, Proficiency::default());
        assert_eq!(user.skills[0].proficiency_level.rank(), None);
    }

    #[test]
    fn test_null_level_serializes_as_empty_text() {
        let skill: Skill = serde_json::from_value(serde_json::json!({
            "name": "Chess",
            "proficiencyLevel": null
        }))
        .unwrap();

        let json = serde_json::to_value(&skill).unwrap();
        assert_eq!(json["proficiencyLevel"], "");
    }

    #[test]
    fn test_empty_optional_fields_are_absent() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "u1",
            "name": "Alice",
            "location": "",
            "phone": "",
            "skills": []
        }))
        .unwrap();

        assert_eq!(user.location(), None);
        assert!(!user.has_phone());
        assert!(!user.has_profile_picture());
    }
}
