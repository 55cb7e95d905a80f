//! Recipe management: browse and post recipes, aggregate selected recipes
//! into a serving-scaled shopping list, and read daily activity from a
//! device health provider.

pub mod controllers;
pub mod error;
pub mod models;
pub mod providers;
pub mod shopping;
pub mod tui;
