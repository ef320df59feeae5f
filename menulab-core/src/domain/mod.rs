//! Domain types for MenuLab

pub mod dish;
pub mod ids;
pub mod menu;

pub use dish::{Dish, DishId};
pub use ids::RunId;
pub use menu::{Menu, MenuError};
