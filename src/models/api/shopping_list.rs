/// One consolidated entry in the aggregated shopping list.
///
/// `id` is exactly the ingredient name: two ingredients merge if and only if
/// their name strings are identical.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    pub quantity: String,
}

impl ShoppingItem {
    pub fn to_string(&self) -> String {
        format!("{}: {}", self.name, self.quantity)
    }
}

/// Aggregation output: items sorted by name plus the summed totals.
///
/// The totals are plain integer strings; re-adding currency or calorie
/// decoration is the presentation layer's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingList {
    pub items: Vec<ShoppingItem>,
    pub total_budget: String,
    pub total_calories: String,
}

impl ShoppingList {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Format the list as a human-readable checklist
    pub fn to_string(&self) -> String {
        let mut output = String::new();

        for item in &self.items {
            output.push_str(&format!("  - {}\n", item.to_string()));
        }
        output.push_str(&format!("推定予算: ¥{}-\n", self.total_budget));
        output.push_str(&format!("推定カロリー: {}kcal\n", self.total_calories));

        output
    }
}
