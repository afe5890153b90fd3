//! Protocol records and the catalog document schema
//!
//! The catalog YAML uses camelCase keys; optional sections (`risks`,
//! `products`, `deepDive`, reference `url`) are modeled as `Option` so that
//! "not documented" is a distinct, typed value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{ParseTierError, ScoreOutOfRange};
use super::sort::SortKey;

/// Route prefix for protocol detail views
pub const ROUTE_PREFIX: &str = "/pd/protocols/";

/// Expected `apiVersion` of a catalog document
pub const CATALOG_API_VERSION: &str = "protocols/v1";

/// Expected `kind` of a catalog document
pub const CATALOG_KIND: &str = "ProtocolCatalog";

/// Resource-availability context a protocol is listed under
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ResourceTier {
    #[default]
    Max,
    Average,
    Limited,
}

impl ResourceTier {
    /// All tiers in selector order
    pub const ALL: [ResourceTier; 3] = [
        ResourceTier::Max,
        ResourceTier::Average,
        ResourceTier::Limited,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceTier::Max => "max",
            ResourceTier::Average => "average",
            ResourceTier::Limited => "limited",
        }
    }

    /// Display label used for selector buttons and badges
    pub fn label(&self) -> &'static str {
        match self {
            ResourceTier::Max => "Maximum Resources",
            ResourceTier::Average => "Average Resources",
            ResourceTier::Limited => "Limited Resources",
        }
    }
}

impl fmt::Display for ResourceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceTier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max" => Ok(ResourceTier::Max),
            "average" => Ok(ResourceTier::Average),
            "limited" => Ok(ResourceTier::Limited),
            _ => Err(ParseTierError(s.to_string())),
        }
    }
}

/// A 1-10 rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Returns `None` when the value falls outside 1..=10
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Score(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Score {
    type Error = ScoreOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Score::new(value).ok_or(ScoreOutOfRange(value))
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Supportive findings and known limitations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    #[serde(default)]
    pub supportive: Vec<String>,

    #[serde(default)]
    pub limitations: Vec<String>,
}

/// A literature citation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub label: String,

    pub citation: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A recommended product for a protocol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub category: String,

    pub name: String,

    pub description: String,

    #[serde(default)]
    pub pros: Vec<String>,

    /// Free-text note on which resource context the product suits
    pub best_for: String,

    pub link: String,
}

/// Long-form supplementary material shown on a detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepDive {
    pub title: String,

    #[serde(default)]
    pub sections: Vec<DeepDiveSection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepDiveSection {
    pub heading: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,

    #[serde(default)]
    pub items: Vec<String>,
}

/// One catalogued intervention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Protocol {
    /// Unique, URL-safe identifier
    pub slug: String,

    pub name: String,

    /// Higher means more clinically significant
    pub importance: Score,

    /// Higher means more expensive
    pub cost: Score,

    /// Higher means easier to implement
    pub ease: Score,

    /// Tiers that list this protocol (never empty once validated)
    pub tiers: Vec<ResourceTier>,

    pub summary: String,

    #[serde(default)]
    pub benefits: Vec<String>,

    #[serde(default)]
    pub evidence: Evidence,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risks: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deep_dive: Option<DeepDive>,

    #[serde(default)]
    pub references: Vec<Reference>,
}

impl Protocol {
    pub fn has_tier(&self, tier: ResourceTier) -> bool {
        self.tiers.contains(&tier)
    }

    /// Value of the field a list is ranked by
    pub fn score(&self, key: SortKey) -> Score {
        match key {
            SortKey::Importance => self.importance,
            SortKey::Cost => self.cost,
            SortKey::Ease => self.ease,
        }
    }

    /// Documented risks; empty both when absent and when listed empty
    pub fn risks(&self) -> &[String] {
        self.risks.as_deref().unwrap_or_default()
    }

    pub fn products(&self) -> &[Product] {
        self.products.as_deref().unwrap_or_default()
    }

    /// Detail-view route for this protocol
    pub fn route(&self) -> String {
        self.route_with_prefix(ROUTE_PREFIX)
    }

    pub fn route_with_prefix(&self, prefix: &str) -> String {
        format!("{prefix}{}", self.slug)
    }

    /// Badge labels for every tier this protocol belongs to
    pub fn tier_labels(&self) -> Vec<&'static str> {
        self.tiers.iter().map(ResourceTier::label).collect()
    }
}

/// On-disk catalog document (protocols.yaml)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    /// API version (must be "protocols/v1")
    pub api_version: String,

    /// Kind (must be "ProtocolCatalog")
    pub kind: String,

    /// Heading shown above the list view
    #[serde(default)]
    pub title: String,

    /// Paragraphs shown above the list view
    #[serde(default)]
    pub introduction: Vec<String>,

    /// All protocols in canonical order
    pub protocols: Vec<Protocol>,
}
