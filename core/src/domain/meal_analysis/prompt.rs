use crate::domain::meal_analysis::value_objects::UserPreferences;

/// Builds the instruction sent alongside the meal photo.
///
/// Only the user's preferences vary between requests; they are embedded as
/// JSON (`{}` when the client sent none).
pub fn build_analysis_prompt(preferences: Option<&UserPreferences>) -> String {
    let preferences = preferences
        .and_then(|p| serde_json::to_string(p).ok())
        .unwrap_or_else(|| "{}".to_string());

    format!(
        r#"Analyze this food image and provide a comprehensive nutritional analysis. Return the response as a valid JSON object with the following structure:

{{
  "ingredients": ["ingredient1", "ingredient2"],
  "nutrition": {{
    "calories": number,
    "protein": "Xg",
    "carbs": "Xg",
    "fat": "Xg",
    "fiber": "Xg"
  }},
  "allergens": ["allergen1", "allergen2"],
  "dietary_tags": ["vegetarian", "gluten-free"],
  "healthScore": number (1-10),
  "alternatives": ["suggestion1", "suggestion2"],
  "portion_analysis": "description of portion size",
  "confidence": number (0.0-1.0),
  "warnings": ["warning1", "warning2"],
  "delivery_recommendation": "how well this meal travels and how to order it for delivery",
  "delivery_options": [
    {{ "platform": "platform name", "eta_minutes": number, "cost_estimate": "$X-Y" }}
  ]
}}

User preferences: {preferences}

Please provide accurate nutritional estimates and helpful health insights. If you cannot clearly identify the food, indicate this in the confidence score and warnings."#
    )
}
