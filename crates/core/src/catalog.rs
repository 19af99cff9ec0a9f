//! Catalog constants, slug validation and category scoping.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Slug of the pseudo-category that stands for "no category filter".
pub const ALL_CATEGORY_SLUG: &str = "all";

/// Display name of the "all" pseudo-category.
pub const ALL_CATEGORY_NAME: &str = "All";

/// Id carried by the synthesized "all" category. Real ids start at 1.
pub const ALL_CATEGORY_ID: DbId = 0;

/// Maximum number of entries returned by a similar-games lookup.
pub const SIMILAR_GAMES_LIMIT: i64 = 4;

/// Number of games shown in the home page "trending" section.
pub const FEATURED_GAMES_LIMIT: i64 = 8;

/// Placeholder path segment produced by unfilled route templates.
const PLACEHOLDER_SLUG: &str = ":";

// ---------------------------------------------------------------------------
// Slugs
// ---------------------------------------------------------------------------

/// Whether a game slug is unusable for a lookup.
///
/// Empty and whitespace-only slugs are degenerate, as is the bare `:` left
/// behind when a `/{slug}` template is rendered without a value.
pub fn is_degenerate_slug(slug: &str) -> bool {
    let trimmed = slug.trim();
    trimmed.is_empty() || trimmed == PLACEHOLDER_SLUG
}

// ---------------------------------------------------------------------------
// Category scope
// ---------------------------------------------------------------------------

/// The category filter applied to a game listing or search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryScope {
    /// No filter: every category.
    All,
    /// Only games referencing this category.
    Id(DbId),
}

impl CategoryScope {
    /// The category id to filter on, or `None` for the unfiltered scope.
    pub fn category_id(self) -> Option<DbId> {
        match self {
            Self::All => None,
            Self::Id(id) => Some(id),
        }
    }

    /// Parse an optional query-string value. Absent or blank means `All`.
    pub fn from_param(value: Option<&str>) -> Result<Self, CoreError> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::All),
            Some(v) => v.parse(),
        }
    }
}

impl FromStr for CategoryScope {
    type Err = CoreError;

    /// Accepts the `all` sentinel (exact, lowercase, like category slugs) or
    /// a positive numeric category id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_CATEGORY_SLUG {
            return Ok(Self::All);
        }
        match s.parse::<DbId>() {
            Ok(id) if id > 0 => Ok(Self::Id(id)),
            _ => Err(CoreError::Validation(format!(
                "category must be '{ALL_CATEGORY_SLUG}' or a positive id, got '{s}'"
            ))),
        }
    }
}

impl fmt::Display for CategoryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CATEGORY_SLUG),
            Self::Id(id) => write!(f, "{id}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- is_degenerate_slug --------------------------------------------------

    #[test]
    fn empty_slug_is_degenerate() {
        assert!(is_degenerate_slug(""));
        assert!(is_degenerate_slug("   "));
    }

    #[test]
    fn placeholder_slug_is_degenerate() {
        assert!(is_degenerate_slug(":"));
        assert!(is_degenerate_slug(" : "));
    }

    #[test]
    fn regular_slug_is_not_degenerate() {
        assert!(!is_degenerate_slug("moto-x3m"));
        assert!(!is_degenerate_slug(":slug"));
    }

    // -- CategoryScope -------------------------------------------------------

    #[test]
    fn scope_parses_all_sentinel() {
        assert_eq!("all".parse::<CategoryScope>().unwrap(), CategoryScope::All);
    }

    #[test]
    fn scope_sentinel_is_case_sensitive() {
        assert!("ALL".parse::<CategoryScope>().is_err());
        assert!("All".parse::<CategoryScope>().is_err());
    }

    #[test]
    fn scope_parses_positive_id() {
        assert_eq!(
            "42".parse::<CategoryScope>().unwrap(),
            CategoryScope::Id(42)
        );
    }

    #[test]
    fn scope_rejects_garbage_and_non_positive_ids() {
        assert!("action".parse::<CategoryScope>().is_err());
        assert!("0".parse::<CategoryScope>().is_err());
        assert!("-3".parse::<CategoryScope>().is_err());
    }

    #[test]
    fn missing_param_means_all() {
        assert_eq!(CategoryScope::from_param(None).unwrap(), CategoryScope::All);
        assert_eq!(
            CategoryScope::from_param(Some(" ")).unwrap(),
            CategoryScope::All
        );
        assert_eq!(
            CategoryScope::from_param(Some("7")).unwrap(),
            CategoryScope::Id(7)
        );
    }

    #[test]
    fn scope_displays_as_query_value() {
        assert_eq!(CategoryScope::All.to_string(), "all");
        assert_eq!(CategoryScope::Id(3).to_string(), "3");
        assert_eq!(CategoryScope::All.category_id(), None);
        assert_eq!(CategoryScope::Id(3).category_id(), Some(3));
    }
}
