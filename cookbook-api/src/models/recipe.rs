use serde::{Deserialize, Serialize};

use super::{null_as_default, Resource};

/// One line of a recipe's ingredient list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct Ingredient {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Body of `POST /recipes` and `PUT /recipes/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct RecipeDraft {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub servings: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub prep_minutes: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub cook_minutes: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub ingredients: Vec<Ingredient>,
    #[serde(deserialize_with = "null_as_default")]
    pub instructions: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub servings: u32,
    pub prep_minutes: u32,
    pub cook_minutes: u32,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub tags: Vec<String>,
}

impl Resource for Recipe {
    const NAME: &'static str = "recipe";
    const PATH: &'static str = "/recipes";

    type Draft = RecipeDraft;
    type View = Recipe;

    fn view(id: i64, draft: RecipeDraft) -> Recipe {
        Recipe {
            id,
            name: draft.name,
            description: draft.description,
            servings: draft.servings,
            prep_minutes: draft.prep_minutes,
            cook_minutes: draft.cook_minutes,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            tags: draft.tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_uses_camel_case_fields() {
        let draft: RecipeDraft = serde_json::from_str(
            r#"{
                "name": "Shakshuka",
                "servings": 2,
                "prepMinutes": 10,
                "cookMinutes": 20,
                "ingredients": [{"name": "eggs", "quantity": 4}],
                "instructions": ["Simmer sauce", "Poach eggs"]
            }"#,
        )
        .unwrap();
        assert_eq!(draft.prep_minutes, 10);
        assert_eq!(draft.ingredients[0].quantity, 4.0);
        assert!(draft.ingredients[0].unit.is_none());
        assert!(draft.tags.is_empty());
    }

    #[test]
    fn test_null_collections_and_quantities_default() {
        let draft: RecipeDraft = serde_json::from_str(
            r#"{"tags": null, "cookMinutes": null, "ingredients": [{"name": "salt", "quantity": null}]}"#,
        )
        .unwrap();
        assert!(draft.tags.is_empty());
        assert_eq!(draft.cook_minutes, 0);
        assert_eq!(draft.ingredients[0].quantity, 0.0);
    }

    #[test]
    fn test_draft_rejects_snake_case_alias() {
        let result: Result<RecipeDraft, _> = serde_json::from_str(r#"{"prep_minutes": 5}"#);
        assert!(result.unwrap_err().to_string().contains("unknown field"));
    }

    #[test]
    fn test_nested_ingredient_rejects_unknown_fields() {
        let result: Result<RecipeDraft, _> =
            serde_json::from_str(r#"{"ingredients": [{"name": "salt", "pinch": true}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_view_keeps_draft_fields() {
        let draft = RecipeDraft {
            name: "Toast".to_string(),
            prep_minutes: 1,
            cook_minutes: 3,
            ..RecipeDraft::default()
        };
        let recipe = Recipe::view(8, draft);
        assert_eq!(recipe.id, 8);
        assert_eq!(recipe.name, "Toast");
        assert_eq!(recipe.prep_minutes + recipe.cook_minutes, 4);

        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["id"], 8);
        assert_eq!(json["cookMinutes"], 3);
        assert!(json.get("description").is_none());
    }
}
