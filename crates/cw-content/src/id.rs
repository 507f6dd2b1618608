//! Identifier generation for keyed list elements.

use uuid::Uuid;

/// Generate a fresh identifier with a readable kind prefix.
///
/// All keyed elements draw from the same UUID source, so ids are unique
/// across the whole document, not just within one sibling list.
///
/// ```
/// let id = cw_content::new_id("nav");
/// assert!(id.starts_with("nav-"));
/// ```
#[must_use]
pub fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_new_id_prefix() {
        let id = new_id("child");

        assert!(id.starts_with("child-"));
        assert_eq!(id.len(), "child-".len() + 32);
    }

    #[test]
    fn test_new_id_never_repeats() {
        let ids: HashSet<String> = (0..1000).map(|_| new_id("nav")).collect();

        assert_eq!(ids.len(), 1000);
    }
}
