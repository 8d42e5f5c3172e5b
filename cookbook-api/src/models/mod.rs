//! Resource payloads
//!
//! Each resource has a write-side *draft* (the body accepted by POST and PUT)
//! and a read-side *view* (what GET returns). Drafts reject unknown fields and
//! default any field the client leaves out or sets to `null`.

mod meal;
mod meal_plan;
mod recipe;

pub use meal::{Meal, MealDraft};
pub use meal_plan::{MealPlan, MealPlanDraft, MealPlanEntry, MealSlot};
pub use recipe::{Ingredient, Recipe, RecipeDraft};

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

/// Binds a resource's name, collection path, draft and view together
///
/// The generic handlers in [`crate::handlers`] and the services in
/// [`crate::service`] are parameterized over this trait.
pub trait Resource: Send + Sync + 'static {
    /// Singular name used in messages and logs, e.g. `"meal plan"`
    const NAME: &'static str;

    /// Collection path, e.g. `"/meal-plans"`
    const PATH: &'static str;

    /// Create/update payload
    type Draft: DeserializeOwned + Clone + Send + Sync + 'static;

    /// Read-side representation
    type View: Serialize + Send + 'static;

    /// Combine a stored draft with its id
    fn view(id: i64, draft: Self::Draft) -> Self::View;
}

/// `null` decodes to the field's zero value, same as an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
