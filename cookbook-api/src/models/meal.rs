use serde::{Deserialize, Serialize};

use super::{null_as_default, Resource};

/// Body of `POST /meals` and `PUT /meals/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct MealDraft {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Recipes served together in this meal
    #[serde(deserialize_with = "null_as_default")]
    pub recipe_ids: Vec<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub servings: u32,
}

/// A stored meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub recipe_ids: Vec<i64>,
    pub servings: u32,
}

impl Resource for Meal {
    const NAME: &'static str = "meal";
    const PATH: &'static str = "/meals";

    type Draft = MealDraft;
    type View = Meal;

    fn view(id: i64, draft: MealDraft) -> Meal {
        Meal {
            id,
            name: draft.name,
            description: draft.description,
            recipe_ids: draft.recipe_ids,
            servings: draft.servings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let draft: MealDraft = serde_json::from_str(r#"{"name": "Sunday roast"}"#).unwrap();
        assert_eq!(draft.name, "Sunday roast");
        assert!(draft.recipe_ids.is_empty());
        assert_eq!(draft.servings, 0);
    }

    #[test]
    fn test_null_fields_take_zero_value() {
        let draft: MealDraft =
            serde_json::from_str(r#"{"name": null, "recipeIds": null, "servings": null}"#).unwrap();
        assert_eq!(draft, MealDraft::default());
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let err = serde_json::from_str::<MealDraft>(r#"{"name": "a", "name": "b"}"#).unwrap_err();
        assert!(err.to_string().contains("duplicate field `name`"));
    }

    #[test]
    fn test_negative_servings_rejected() {
        let result: Result<MealDraft, _> = serde_json::from_str(r#"{"servings": -2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_view_serializes_recipe_ids_camel_case() {
        let meal = Meal::view(
            3,
            MealDraft {
                name: "Brunch".to_string(),
                recipe_ids: vec![1, 2],
                ..MealDraft::default()
            },
        );
        let json = serde_json::to_value(&meal).unwrap();
        assert_eq!(json["recipeIds"], serde_json::json!([1, 2]));
        assert_eq!(json["id"], 3);
    }
}
