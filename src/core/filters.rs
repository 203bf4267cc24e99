use crate::models::User;
use std::collections::HashSet;

/// Category value that disables category filtering
pub const ALL_CATEGORIES: &str = "all";

/// Check if a user matches a free-text directory search
///
/// The term is matched case-insensitively against the name, the bio and every
/// skill name. An empty term matches everyone.
#[inline]
pub fn matches_search(user: &User, term: &str) -> bool {
    let term = term.to_lowercase();
    if term.is_empty() {
        return true;
    }

    user.name.to_lowercase().contains(&term)
        || user.bio.to_lowercase().contains(&term)
        || user
            .skills
            .iter()
            .any(|skill| skill.name.to_lowercase().contains(&term))
}

/// Check if a user lists at least one skill in `category`
///
/// `None` and `"all"` match everyone. Category comparison is exact.
#[inline]
pub fn matches_category(user: &User, category: Option<&str>) -> bool {
    match category {
        None | Some(ALL_CATEGORIES) => true,
        Some(category) => user.skills.iter().any(|skill| skill.category == category),
    }
}

/// Filter the browse directory, keeping the input order
pub fn filter_directory<'a>(
    users: &'a [User],
    term: &str,
    category: Option<&str>,
) -> Vec<&'a User> {
    users
        .iter()
        .filter(|user| matches_search(user, term))
        .filter(|user| matches_category(user, category))
        .collect()
}

/// Category choices for the directory: `"all"` then every category in encounter order
pub fn directory_categories(users: &[User]) -> Vec<String> {
    let mut seen = HashSet::new();
    std::iter::once(ALL_CATEGORIES)
        .chain(
            users
                .iter()
                .flat_map(|user| user.skills.iter().map(|skill| skill.category.as_str())),
        )
        .filter(|category| seen.insert(*category))
        .map(str::to_string)
        .collect()
}
