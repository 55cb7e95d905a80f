mod shopping_list;

pub use shopping_list::{ShoppingItem, ShoppingList};
