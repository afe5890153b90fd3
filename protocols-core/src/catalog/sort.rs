//! Ranking of tier-filtered protocol lists
//!
//! Sorting is always stable: protocols with equal scores keep the order they
//! had in the input, which for list views is catalog order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::error::{ParseDirectionError, ParseSortKeyError};
use super::model::Protocol;

/// Numeric field a list is ranked by
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Importance,
    Cost,
    Ease,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Importance, SortKey::Cost, SortKey::Ease];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Importance => "importance",
            SortKey::Cost => "cost",
            SortKey::Ease => "ease",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Importance => "Importance",
            SortKey::Cost => "Cost",
            SortKey::Ease => "Ease of Implementation",
        }
    }

    /// Direction used when none is chosen: best-first for each key
    ///
    /// High importance and high ease rank first; low cost ranks first.
    pub fn default_direction(&self) -> SortDirection {
        match self {
            SortKey::Importance | SortKey::Ease => SortDirection::Descending,
            SortKey::Cost => SortDirection::Ascending,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "importance" => Ok(SortKey::Importance),
            "cost" => Ok(SortKey::Cost),
            "ease" => Ok(SortKey::Ease),
            _ => Err(ParseSortKeyError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// A sort key plus an optional explicit direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOrder {
    pub key: SortKey,

    /// `None` means the key's natural direction
    pub direction: Option<SortDirection>,
}

impl SortOrder {
    /// Order by `key` in its natural direction
    pub fn by(key: SortKey) -> Self {
        Self {
            key,
            direction: None,
        }
    }

    pub fn with_direction(key: SortKey, direction: SortDirection) -> Self {
        Self {
            key,
            direction: Some(direction),
        }
    }

    pub fn effective_direction(&self) -> SortDirection {
        self.direction.unwrap_or_else(|| self.key.default_direction())
    }

    /// Comparator for two protocols under this order
    pub fn compare(&self, a: &Protocol, b: &Protocol) -> Ordering {
        let ordering = a.score(self.key).cmp(&b.score(self.key));
        match self.effective_direction() {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Return a newly ordered copy of `protocols`
///
/// The input slice is left untouched. Ties keep their input order.
pub fn sort_protocols<'a>(protocols: &[&'a Protocol], order: SortOrder) -> Vec<&'a Protocol> {
    let mut sorted = protocols.to_vec();
    // slice::sort_by is a stable merge sort
    sorted.sort_by(|a, b| order.compare(a, b));

    tracing::trace!(
        key = %order.key,
        direction = %order.effective_direction(),
        count = sorted.len(),
        "Sorted protocol list"
    );

    sorted
}
