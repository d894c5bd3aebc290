//! # Shared Utility Functions
//!
//! Small text helpers used by the client and by insert payloads.
//!
//! ## Name Normalisation
//!
//! Menu items and categories are stored with a normalised name:
//! - [`capitalize_name`] - Trim, upper-case the first character, lower-case the rest
//!
//! ## Form Input
//!
//! - [`split_list`] - Comma separated input into trimmed, non-empty entries
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{capitalize_name, split_list};
//!
//! assert_eq!(capitalize_name("  bEEF stroganoff "), "Beef stroganoff");
//! assert_eq!(split_list("beef, cream,, onion "), vec!["beef", "cream", "onion"]);
//! ```

/// Normalise a display name before insert.
///
/// Trims surrounding whitespace, upper-cases the first character and
/// lower-cases the remainder. An empty or blank input yields an empty string.
///
/// # Examples
///
/// ```rust
/// use shared::utils::capitalize_name;
///
/// assert_eq!(capitalize_name("desserts"), "Desserts");
/// assert_eq!(capitalize_name("ЩИ ПО-ДОМАШНЕМУ"), "Щи по-домашнему");
/// assert_eq!(capitalize_name("   "), "");
/// ```
pub fn capitalize_name(name: &str) -> String {
    let trimmed = name.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Split comma separated input, dropping blank entries.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Placeholder avatar derived from a user id.
///
/// ```rust
/// use shared::utils::avatar_url;
///
/// assert_eq!(avatar_url("42"), "https://picsum.photos/seed/42/100/100");
/// ```
pub fn avatar_url(user_id: &str) -> String {
    format!("https://picsum.photos/seed/{}/100/100", user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_name() {
        assert_eq!(capitalize_name("salads"), "Salads");
        assert_eq!(capitalize_name("  HOT DRINKS  "), "Hot drinks");
        assert_eq!(capitalize_name("x"), "X");
        assert_eq!(capitalize_name(""), "");
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("milk, eggs"), vec!["milk", "eggs"]);
        assert_eq!(split_list(" , ,"), Vec::<String>::new());
        assert_eq!(split_list(""), Vec::<String>::new());
        assert_eq!(split_list("gluten"), vec!["gluten"]);
    }
}
