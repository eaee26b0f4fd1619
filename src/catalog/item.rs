//! Items and the catalog that holds them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// A priced item with a fixed-size attribute vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name, used only when decoding results.
    pub name: String,
    /// Unit cost.
    pub cost: f64,
    /// Attribute values (calories, protein, ... for a diet catalog).
    pub attributes: Vec<f64>,
}

impl Item {
    /// Creates an item.
    pub fn new(name: impl Into<String>, cost: f64, attributes: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            cost,
            attributes,
        }
    }
}

/// Ordered, index-addressable sequence of items with a common dimension.
///
/// The catalog is validated on construction: it is non-empty, every item
/// has the same number of attributes, and all numbers are finite.
///
/// # Examples
///
/// ```
/// use u_subset::catalog::{Catalog, Item};
///
/// let catalog = Catalog::new(vec![
///     Item::new("Rice", 40.0, vec![130.0, 2.7]),
///     Item::new("Egg", 20.0, vec![78.0, 6.3]),
/// ])
/// .unwrap();
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.dimension(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a validated catalog.
    pub fn new(items: Vec<Item>) -> std::result::Result<Self, ConfigError> {
        let first = items.first().ok_or(ConfigError::EmptyCatalog)?;
        let dimension = first.attributes.len();

        for item in &items {
            if item.attributes.len() != dimension {
                return Err(ConfigError::DimensionMismatch {
                    context: format!("item '{}'", item.name),
                    expected: dimension,
                    found: item.attributes.len(),
                });
            }
            if !item.cost.is_finite() {
                return Err(ConfigError::NonFinite(format!("cost of '{}'", item.name)));
            }
            if item.attributes.iter().any(|a| !a.is_finite()) {
                return Err(ConfigError::NonFinite(format!(
                    "attributes of '{}'",
                    item.name
                )));
            }
        }

        Ok(Self { items })
    }

    /// Parses a catalog from a JSON array of items.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Ok(Self::new(items)?)
    }

    /// Reads a catalog from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Number of items (N).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no items. `false` for any validated catalog.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Attribute dimensionality (m).
    pub fn dimension(&self) -> usize {
        self.items[0].attributes.len()
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the item at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn item(&self, index: usize) -> &Item {
        &self.items[index]
    }

    /// Sums cost and each attribute over the given item indices.
    ///
    /// Returns `(total_cost, attribute_totals)`.
    pub fn aggregate<I>(&self, indices: I) -> (f64, Vec<f64>)
    where
        I: IntoIterator<Item = usize>,
    {
        let mut cost = 0.0;
        let mut totals = vec![0.0; self.dimension()];
        for i in indices {
            let item = &self.items[i];
            cost += item.cost;
            for (t, a) in totals.iter_mut().zip(&item.attributes) {
                *t += a;
            }
        }
        (cost, totals)
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items = Vec::<Item>::deserialize(deserializer)?;
        Catalog::new(items).map_err(serde::de::Error::custom)
    }
}
