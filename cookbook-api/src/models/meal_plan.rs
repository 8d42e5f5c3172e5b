use std::fmt;

use chrono::NaiveDate;
use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize,
};

use super::{null_as_default, Resource};

/// Time of day a planned meal is eaten
///
/// Decoded from a JSON string only, so a non-string value is reported as a
/// type mismatch on the `slot` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    const VARIANTS: &'static [&'static str] = &["breakfast", "lunch", "dinner", "snack"];
}

impl<'de> Deserialize<'de> for MealSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SlotVisitor;

        impl Visitor<'_> for SlotVisitor {
            type Value = MealSlot;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a meal slot string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<MealSlot, E> {
                match value {
                    "breakfast" => Ok(MealSlot::Breakfast),
                    "lunch" => Ok(MealSlot::Lunch),
                    "dinner" => Ok(MealSlot::Dinner),
                    "snack" => Ok(MealSlot::Snack),
                    other => Err(E::unknown_variant(other, MealSlot::VARIANTS)),
                }
            }
        }

        deserializer.deserialize_str(SlotVisitor)
    }
}

/// A meal scheduled on a given day
///
/// Every field is required; an entry without a day or slot is meaningless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MealPlanEntry {
    pub day: NaiveDate,
    pub slot: MealSlot,
    #[serde(deserialize_with = "null_as_default")]
    pub meal_id: i64,
}

/// Body of `POST /meal-plans` and `PUT /meal-plans/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct MealPlanDraft {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(deserialize_with = "null_as_default")]
    pub entries: Vec<MealPlanEntry>,
}

/// A stored meal plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub entries: Vec<MealPlanEntry>,
}

impl Resource for MealPlan {
    const NAME: &'static str = "meal plan";
    const PATH: &'static str = "/meal-plans";

    type Draft = MealPlanDraft;
    type View = MealPlan;

    fn view(id: i64, draft: MealPlanDraft) -> MealPlan {
        MealPlan {
            id,
            name: draft.name,
            start_date: draft.start_date,
            end_date: draft.end_date,
            entries: draft.entries,
        }
    }
}
