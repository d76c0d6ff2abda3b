use serde::{Deserialize, Serialize};

/// The discipline an id-based search walks the catalog tree in.
///
/// Sibling order is always the stored insertion order; the discipline only
/// decides when a node is visited relative to its children:
///
/// - `Pre`: node before its children (the default)
/// - `Post`: node after its children
/// - `Level`: all nodes of one depth before any node of the next
///
/// Because ids are only unique among siblings, the same id at two tree
/// positions can produce different matches under different disciplines.
/// That is inherent to the id scheme, not an error.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    #[default]
    Pre,
    Post,
    Level,
}

impl TraversalOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pre => "pre",
            Self::Post => "post",
            Self::Level => "level",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pre" => Some(Self::Pre),
            "post" => Some(Self::Post),
            "level" => Some(Self::Level),
            _ => None,
        }
    }

    /// Resolve a free-form order keyword, falling back to `default`.
    ///
    /// Order selection is advisory: an unrecognized keyword is not a
    /// request failure, it just means the caller gets the default walk.
    pub fn parse_or(keyword: &str, default: Self) -> Self {
        Self::from_str(keyword).unwrap_or(default)
    }
}
