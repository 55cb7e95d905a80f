use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A recipe document as authored by a user.
///
/// Field names follow the camelCase keys of the backing document store, so a
/// serialized `Recipe` is byte-compatible with the documents the mobile app
/// writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub cooking_time: String,
    /// Free-text serving descriptor, e.g. "4人分". The nominal serving count
    /// is extracted from this text, never stored separately.
    pub servings: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    /// Free-text currency string, e.g. "500円" or "¥500-".
    pub estimated_budget: String,
    /// Free-text calorie string, e.g. "1,200kcal".
    pub estimated_calories: String,
    pub author_id: String,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    pub likes: i64,
    pub is_public: bool,
}

/// A single ingredient line within a recipe.
///
/// `name` doubles as the aggregation key for shopping lists and is treated as
/// an exact string: no case folding or whitespace trimming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Free-text quantity descriptor, e.g. "2個", "200g" or "適量".
    pub amount: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
        }
    }
}

/// Difficulty label shown on recipe cards. User-authored documents may carry
/// anything; unknown labels decode as `Normal` rather than failing the
/// document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "簡単",
            Difficulty::Normal => "普通",
            Difficulty::Hard => "難しい",
        }
    }
}

impl From<String> for Difficulty {
    fn from(label: String) -> Self {
        match label.as_str() {
            "簡単" => Difficulty::Easy,
            "難しい" => Difficulty::Hard,
            _ => Difficulty::Normal,
        }
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.as_str().to_string()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed demo recipe set, used when the app runs without a real backend.
pub fn demo_recipes() -> Vec<Recipe> {
    let now = Utc::now();
    vec![
        Recipe {
            id: "demo-1".to_string(),
            title: "デモレシピ1".to_string(),
            description: "これはデモ用のレシピです。".to_string(),
            ingredients: vec![Ingredient::new("材料A", "1個")],
            instructions: vec!["手順1".to_string(), "手順2".to_string()],
            cooking_time: "30分".to_string(),
            servings: "2人分".to_string(),
            difficulty: Difficulty::Easy,
            tags: vec!["和食".to_string(), "時短".to_string()],
            estimated_budget: "500円".to_string(),
            estimated_calories: "300kcal".to_string(),
            author_id: "demoUser1".to_string(),
            author_name: "デモユーザー1".to_string(),
            created_at: now - Duration::hours(1),
            likes: 5,
            is_public: true,
        },
        Recipe {
            id: "demo-2".to_string(),
            title: "デモレシピ2".to_string(),
            description: "もう一つのデモレシピ。".to_string(),
            ingredients: vec![Ingredient::new("材料B", "2個")],
            instructions: vec!["手順A".to_string(), "手順B".to_string()],
            cooking_time: "45分".to_string(),
            servings: "4人分".to_string(),
            difficulty: Difficulty::Normal,
            tags: vec!["洋食".to_string(), "ヘルシー".to_string()],
            estimated_budget: "800円".to_string(),
            estimated_calories: "450kcal".to_string(),
            author_id: "demoUser2".to_string(),
            author_name: "デモユーザー2".to_string(),
            created_at: now - Duration::hours(2),
            likes: 10,
            is_public: true,
        },
        Recipe {
            id: "demo-3".to_string(),
            title: "嫁カレー".to_string(),
            description: "お気に入りのカレーレシピ".to_string(),
            ingredients: vec![
                Ingredient::new("ごはん", "4杯"),
                Ingredient::new("赤パプリカ", "1/2個"),
                Ingredient::new("ズッキーニ", "1/2本"),
            ],
            instructions: vec!["手順1".to_string(), "手順2".to_string()],
            cooking_time: "30分".to_string(),
            servings: "4人分".to_string(),
            difficulty: Difficulty::Easy,
            tags: vec!["和食".to_string(), "カレー".to_string()],
            estimated_budget: "2500円".to_string(),
            estimated_calories: "4000kcal".to_string(),
            author_id: "demoUser1".to_string(),
            author_name: "しゅうとのよめ".to_string(),
            created_at: now - Duration::hours(3),
            likes: 15,
            is_public: true,
        },
        Recipe {
            id: "demo-4".to_string(),
            title: "簡単パスタ".to_string(),
            description: "時短パスタレシピ".to_string(),
            ingredients: vec![
                Ingredient::new("スパゲッティ", "200g"),
                Ingredient::new("トマト", "2個"),
            ],
            instructions: vec!["手順A".to_string(), "手順B".to_string()],
            cooking_time: "15分".to_string(),
            servings: "2人分".to_string(),
            difficulty: Difficulty::Easy,
            tags: vec!["洋食".to_string(), "パスタ".to_string()],
            estimated_budget: "800円".to_string(),
            estimated_calories: "600kcal".to_string(),
            author_id: "demoUser2".to_string(),
            author_name: "料理好き".to_string(),
            created_at: now - Duration::hours(4),
            likes: 8,
            is_public: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_labels_roundtrip() {
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            let label = String::from(difficulty);
            assert_eq!(Difficulty::from(label), difficulty);
        }
    }

    #[test]
    fn test_difficulty_unknown_label_falls_back_to_normal() {
        assert_eq!(Difficulty::from("激ムズ".to_string()), Difficulty::Normal);
        assert_eq!(Difficulty::from(String::new()), Difficulty::Normal);
    }

    #[test]
    fn test_recipe_document_uses_camel_case_keys() {
        let recipe = demo_recipes().remove(0);

        let document = serde_json::to_value(&recipe).expect("Failed to serialize recipe");

        // The document store keys are camelCase
        assert!(document.get("cookingTime").is_some());
        assert!(document.get("estimatedBudget").is_some());
        assert!(document.get("estimatedCalories").is_some());
        assert!(document.get("authorId").is_some());
        assert!(document.get("isPublic").is_some());
        assert_eq!(document["difficulty"], "簡単");
    }

    #[test]
    fn test_recipe_document_roundtrip() {
        let recipe = demo_recipes().remove(2);

        let json = serde_json::to_string(&recipe).expect("Failed to serialize recipe");
        let decoded: Recipe = serde_json::from_str(&json).expect("Failed to deserialize recipe");

        assert_eq!(decoded, recipe);
    }

    #[test]
    fn test_demo_recipes_are_public_and_liked() {
        let recipes = demo_recipes();

        assert_eq!(recipes.len(), 4);
        assert!(recipes.iter().all(|r| r.is_public));
        assert!(recipes.iter().all(|r| r.likes > 4));
    }
}
