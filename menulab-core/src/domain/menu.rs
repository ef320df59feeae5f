//! Menu — the ordered set of acquired dishes.
//!
//! Insertion order is a contract, not an accident: the popularity partition
//! assigns one piece per dish in menu order, and the selector lays its
//! cumulative weights out in the same order, so a given seed reproduces the
//! same draws run after run.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::dish::{Dish, DishId};

/// Errors from menu construction.
#[derive(Debug, Error, PartialEq)]
pub enum MenuError {
    #[error("dish '{id}' is already on the menu")]
    DuplicateDish { id: DishId },
    #[error("dish '{id}' has invalid price {price}")]
    InvalidPrice { id: DishId, price: f64 },
}

/// Ordered collection of acquired dishes with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    dishes: Vec<Dish>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a menu from a dish list, validating each entry in order.
    pub fn from_dishes(dishes: impl IntoIterator<Item = Dish>) -> Result<Self, MenuError> {
        let mut menu = Self::new();
        for dish in dishes {
            menu.add(dish)?;
        }
        Ok(menu)
    }

    /// Append a dish. Fails on duplicate ids or unsellable prices; the menu
    /// is unchanged on failure.
    pub fn add(&mut self, dish: Dish) -> Result<(), MenuError> {
        if !dish.is_sane() {
            return Err(MenuError::InvalidPrice {
                id: dish.id.clone(),
                price: dish.price,
            });
        }
        if self.dishes.iter().any(|d| d.id == dish.id) {
            return Err(MenuError::DuplicateDish { id: dish.id });
        }
        self.dishes.push(dish);
        Ok(())
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn dish_ids(&self) -> impl Iterator<Item = &DishId> {
        self.dishes.iter().map(|d| &d.id)
    }

    pub fn get(&self, id: &DishId) -> Option<&Dish> {
        self.dishes.iter().find(|d| &d.id == id)
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}
