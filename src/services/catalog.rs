use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when editing the catalog
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Skill name must not be empty")]
    EmptyName,
}

/// Category assigned to user-entered skills
pub const CUSTOM_CATEGORY: &str = "other";

const PREDEFINED_SKILLS: &[(&str, &str)] = &[
    ("JavaScript", "technology"),
    ("Python", "technology"),
    ("React", "technology"),
    ("Node.js", "technology"),
    ("TypeScript", "technology"),
    ("SQL", "technology"),
    ("Spanish", "languages"),
    ("French", "languages"),
    ("German", "languages"),
    ("Italian", "languages"),
    ("Guitar", "music"),
    ("Piano", "music"),
    ("Violin", "music"),
    ("Singing", "music"),
    ("Photography", "art"),
    ("Drawing", "art"),
    ("Painting", "art"),
    ("Digital Art", "art"),
    ("Cooking", "cooking"),
    ("Baking", "cooking"),
    ("Yoga", "sports"),
    ("Tennis", "sports"),
    ("Swimming", "sports"),
    ("Running", "sports"),
    ("Marketing", "business"),
    ("Public Speaking", "business"),
    ("Project Management", "business"),
    ("Sales", "business"),
    ("Writing", "creative"),
    ("Video Editing", "creative"),
    ("Graphic Design", "creative"),
    ("Web Design", "creative"),
];

/// Selectable skill offered when editing a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSkill {
    pub name: String,
    pub category: String,
}

/// Registry of skills users can pick from
///
/// The catalog is a plain value: whoever owns it decides how it is shared.
/// The HTTP service keeps one behind a lock in its application state.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    skills: Vec<CatalogSkill>,
}

impl SkillCatalog {
    /// Create an empty catalog
    pub fn empty() -> Self {
        Self { skills: Vec::new() }
    }

    /// Create a catalog seeded with the predefined skills
    pub fn predefined() -> Self {
        Self {
            skills: PREDEFINED_SKILLS
                .iter()
                .map(|(name, category)| CatalogSkill {
                    name: name.to_string(),
                    category: category.to_string(),
                })
                .collect(),
        }
    }

    pub fn entries(&self) -> &[CatalogSkill] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Case-insensitive lookup by name
    pub fn find(&self, name: &str) -> Option<&CatalogSkill> {
        let name = name.trim().to_lowercase();
        self.skills.iter().find(|skill| skill.name.to_lowercase() == name)
    }

    /// Distinct categories in catalog order
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for skill in &self.skills {
            if !categories.contains(&skill.category) {
                categories.push(skill.category.clone());
            }
        }
        categories
    }

    pub fn by_category(&self, category: &str) -> Vec<&CatalogSkill> {
        self.skills
            .iter()
            .filter(|skill| skill.category == category)
            .collect()
    }

    /// Add a user-entered skill under the custom category
    ///
    /// Returns the stored entry and whether it was newly inserted. A name that
    /// already exists (ignoring case) returns the existing entry unchanged.
    pub fn add_custom(&mut self, name: &str) -> Result<(CatalogSkill, bool), CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }

        if let Some(existing) = self.find(name) {
            return Ok((existing.clone(), false));
        }

        let skill = CatalogSkill {
            name: name.to_string(),
            category: CUSTOM_CATEGORY.to_string(),
        };
        self.skills.push(skill.clone());
        tracing::debug!("Added custom skill to catalog: {}", skill.name);

        Ok((skill, true))
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::predefined()
    }
}
