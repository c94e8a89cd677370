//! Path matching for the users resource.
//!
//! # Responsibilities
//! - Recognize the collection path exactly (`/users`)
//! - Recognize `/users/<digits>` with one optional trailing slash
//! - Parse the ID, treating overflow as no match
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Only ASCII digits are accepted in the ID segment
//! - The raw request path is matched; percent-escapes are not decoded
//! - No regex to guarantee O(n) matching

/// What a request path addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The collection of all users.
    Collection,
    /// A single user by ID.
    Resource(u64),
}

/// Matches paths under a single collection prefix.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    collection: String,
}

impl PathMatcher {
    /// Create a matcher for the collection rooted at `collection` (e.g. `/users`).
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
        }
    }

    /// Resolve a path, or `None` when it addresses nothing we serve.
    pub fn resolve(&self, path: &str) -> Option<Target> {
        let rest = path.strip_prefix(self.collection.as_str())?;
        if rest.is_empty() {
            return Some(Target::Collection);
        }

        let segment = rest.strip_prefix('/')?;
        let segment = segment.strip_suffix('/').unwrap_or(segment);
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        // Digits only, so the only possible failure is overflow
        match segment.parse::<u64>() {
            Ok(id) => Some(Target::Resource(id)),
            Err(e) => {
                tracing::debug!(path = %path, error = %e, "Resource id out of range");
                None
            }
        }
    }
}

impl Default for PathMatcher {
    fn default() -> Self {
        Self::new("/users")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_is_exact() {
        let matcher = PathMatcher::default();
        assert_eq!(matcher.resolve("/users"), Some(Target::Collection));
        assert_eq!(matcher.resolve("/users/"), None);
        assert_eq!(matcher.resolve("/usersx"), None);
        assert_eq!(matcher.resolve("/Users"), None);
        assert_eq!(matcher.resolve("/"), None);
        assert_eq!(matcher.resolve("/api/users"), None);
    }

    #[test]
    fn test_resource_paths() {
        let matcher = PathMatcher::default();
        assert_eq!(matcher.resolve("/users/1"), Some(Target::Resource(1)));
        assert_eq!(matcher.resolve("/users/42/"), Some(Target::Resource(42)));
        assert_eq!(matcher.resolve("/users/007"), Some(Target::Resource(7)));
        assert_eq!(matcher.resolve("/users/0"), Some(Target::Resource(0)));
    }

    #[test]
    fn test_rejected_resource_paths() {
        let matcher = PathMatcher::default();
        assert_eq!(matcher.resolve("/users/abc"), None);
        assert_eq!(matcher.resolve("/users/1a"), None);
        assert_eq!(matcher.resolve("/users/-1"), None);
        assert_eq!(matcher.resolve("/users/+1"), None);
        assert_eq!(matcher.resolve("/users/1//"), None);
        assert_eq!(matcher.resolve("/users/1/posts"), None);
        assert_eq!(matcher.resolve("/users//1"), None);
        assert_eq!(matcher.resolve("/users/١"), None);
    }

    #[test]
    fn test_percent_escapes_are_not_decoded() {
        let matcher = PathMatcher::default();
        assert_eq!(matcher.resolve("/users/%31"), None);
        assert_eq!(matcher.resolve("/%75sers"), None);
        assert_eq!(matcher.resolve("/users%2F1"), None);
    }

    #[test]
    fn test_overflow_is_no_match() {
        let matcher = PathMatcher::default();
        assert_eq!(
            matcher.resolve("/users/18446744073709551615"),
            Some(Target::Resource(u64::MAX))
        );
        assert_eq!(matcher.resolve("/users/18446744073709551616"), None);
        assert_eq!(matcher.resolve("/users/99999999999999999999999999"), None);
    }
}
