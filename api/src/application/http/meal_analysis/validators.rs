use serde::Deserialize;
use snapmeal_core::domain::meal_analysis::{AnalyzeMealInput, UserPreferences};
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeMealRequest {
    /// Raw base64 image data or a `data:` URL.
    #[serde(default)]
    pub image_base64: Option<String>,

    /// Free-form preferences; `allergies` drives the allergen alert.
    #[serde(default)]
    #[schema(value_type = Option<Object>, example = json!({"dietary": ["vegetarian"], "allergies": ["peanuts"], "goals": ["weight-loss"]}))]
    pub user_preferences: Option<UserPreferences>,
}

impl From<AnalyzeMealRequest> for AnalyzeMealInput {
    fn from(request: AnalyzeMealRequest) -> Self {
        Self {
            image_base64: request.image_base64,
            preferences: request.user_preferences,
        }
    }
}
