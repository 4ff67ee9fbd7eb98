//! Catalog parts and the multi-field filter the catalog answers.

use crate::framework::ActorEntity;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for catalog parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartId(pub String);

impl PartId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl Display for PartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Unspecified,
    Engine,
    Fuel,
    Porthole,
    Wing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub name: String,
    pub country: String,
    pub website: String,
}

/// Represents a part in the catalog.
///
/// Only `id` and `price` matter to order creation; the rest is catalog metadata
/// used by [`PartsFilter`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: PartId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: u32,
    pub category: Category,
    pub dimensions: Option<Dimensions>,
    pub manufacturer: Option<Manufacturer>,
    pub tags: Vec<String>,
}

impl ActorEntity for Part {
    type Id = PartId;

    fn id(&self) -> &PartId {
        &self.id
    }
}

/// Catalog listing filter.
///
/// Every list is optional: an empty list places no constraint on that field, and a
/// part is returned when it satisfies all the non-empty lists. The default filter
/// therefore returns the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartsFilter {
    #[serde(default)]
    pub ids: Vec<PartId>,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub manufacturer_countries: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl PartsFilter {
    /// Filter selecting exactly the given ids.
    pub fn by_ids(ids: impl Into<Vec<PartId>>) -> Self {
        Self {
            ids: ids.into(),
            ..Self::default()
        }
    }

    pub fn matches(&self, part: &Part) -> bool {
        self.matches_id(part)
            && self.matches_name(part)
            && self.matches_category(part)
            && self.matches_manufacturer_country(part)
            && self.matches_tags(part)
    }

    fn matches_id(&self, part: &Part) -> bool {
        self.ids.is_empty() || self.ids.contains(&part.id)
    }

    fn matches_name(&self, part: &Part) -> bool {
        self.names.is_empty() || self.names.contains(&part.name)
    }

    fn matches_category(&self, part: &Part) -> bool {
        self.categories.is_empty() || self.categories.contains(&part.category)
    }

    // A part without a manufacturer never satisfies a country constraint.
    fn matches_manufacturer_country(&self, part: &Part) -> bool {
        if self.manufacturer_countries.is_empty() {
            return true;
        }
        part.manufacturer
            .as_ref()
            .is_some_and(|m| self.manufacturer_countries.contains(&m.country))
    }

    fn matches_tags(&self, part: &Part) -> bool {
        self.tags.is_empty() || self.tags.iter().any(|tag| part.tags.contains(tag))
    }
}
