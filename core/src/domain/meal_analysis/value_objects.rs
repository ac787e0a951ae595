use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::meal_analysis::entities::MealAnalysis;

/// Free-form dietary preferences sent along with a photo.
///
/// Known keys are typed; anything else is kept so the prompt embeds the
/// object exactly as the client sent it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserPreferences {
    pub fn allergies(&self) -> &[String] {
        self.allergies.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnalyzeMealInput {
    pub image_base64: Option<String>,
    pub preferences: Option<UserPreferences>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedMeal {
    pub analysis: MealAnalysis,
    pub analyzed_at: DateTime<Utc>,
}
