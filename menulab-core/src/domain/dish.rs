//! Dish — the unit of demand.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a dish on the menu.
///
/// Serializes as a plain string so demand maps keyed by `DishId` stay
/// readable in JSON artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishId(pub String);

impl DishId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DishId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A dish a restaurant can serve: identity, display name, and menu price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    pub price: f64,
}

impl Dish {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: DishId::new(id),
            name: name.into(),
            price,
        }
    }

    /// A dish is sellable when its price is a finite, non-negative number.
    pub fn is_sane(&self) -> bool {
        self.price.is_finite() && self.price >= 0.0
    }
}
