use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError, meal_analysis::entities::MealAnalysis,
};

/// Greedy: spans from the first `{` to the last `}` in the reply.
static JSON_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[\s\S]*\}").expect("JSON object pattern is valid"));

/// Returns the JSON object embedded in a model reply, or the whole reply
/// when no braces are present. Handles prose and markdown fences around it.
pub fn extract_json_payload(raw: &str) -> &str {
    JSON_OBJECT.find(raw).map_or(raw, |m| m.as_str())
}

/// Parses a free-form model reply into a [`MealAnalysis`].
///
/// Fails with [`CoreError::InvalidModelResponse`] when no JSON can be read and
/// with [`CoreError::IncompleteAnalysis`] when ingredients, nutrition or the
/// health score are missing. The parsed object is otherwise kept as is, apart
/// from the delivery defaults.
pub fn parse_meal_analysis(raw: &str) -> Result<MealAnalysis, CoreError> {
    let payload = extract_json_payload(raw);

    let value: Value = serde_json::from_str(payload).map_err(|e| {
        error!(content = raw, "Failed to parse model response: {}", e);
        CoreError::InvalidModelResponse
    })?;

    let Value::Object(fields) = value else {
        return Err(CoreError::IncompleteAnalysis);
    };
    ensure_complete(&fields)?;

    let mut analysis = MealAnalysis::new(fields);
    analysis.fill_delivery_defaults();

    Ok(analysis)
}

fn ensure_complete(fields: &Map<String, Value>) -> Result<(), CoreError> {
    let has_ingredients = fields
        .get("ingredients")
        .and_then(Value::as_array)
        .is_some_and(|ingredients| !ingredients.is_empty());

    let has_nutrition = fields.get("nutrition").is_some_and(Value::is_object);

    let has_health_score = fields.get("healthScore").is_some_and(is_truthy);

    if has_ingredients && has_nutrition && has_health_score {
        Ok(())
    } else {
        Err(CoreError::IncompleteAnalysis)
    }
}

/// JSON truthiness: null, false, 0 and "" are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn complete_analysis() -> Value {
        json!({
            "ingredients": ["chicken", "broccoli"],
            "nutrition": { "calories": 350, "protein": "30g", "carbs": "15g", "fat": "18g" },
            "allergens": [],
            "dietary_tags": ["gluten-free"],
            "healthScore": 8,
            "alternatives": [],
            "portion_analysis": "Standard serving",
            "confidence": 0.9
        })
    }

    #[test]
    fn test_extract_returns_whole_text_without_braces() {
        assert_eq!(extract_json_payload("no json here"), "no json here");
    }

    #[test]
    fn test_extract_is_greedy() {
        let raw = "first {\"a\": 1} then {\"b\": 2} done";
        assert_eq!(extract_json_payload(raw), "{\"a\": 1} then {\"b\": 2}");
    }

    #[test]
    fn test_parse_markdown_fenced_reply() {
        let raw = format!("```json\n{}\n```", complete_analysis());
        let analysis = parse_meal_analysis(&raw).expect("fenced JSON should parse");
        assert_eq!(analysis.get("ingredients"), Some(&json!(["chicken", "broccoli"])));
    }

    #[test]
    fn test_parse_reply_with_leading_prose() {
        let raw = format!(
            "Here is the analysis you asked for:\n{}\nLet me know if you need more.",
            complete_analysis()
        );
        let analysis = parse_meal_analysis(&raw).expect("prose-wrapped JSON should parse");
        assert_eq!(analysis.get("healthScore"), Some(&json!(8)));
    }

    #[test]
    fn test_parse_rejects_plain_text() {
        assert_eq!(
            parse_meal_analysis("This is not valid JSON"),
            Err(CoreError::InvalidModelResponse)
        );
    }

    #[test]
    fn test_parse_rejects_broken_json_between_braces() {
        assert_eq!(
            parse_meal_analysis("{ ingredients: rice }"),
            Err(CoreError::InvalidModelResponse)
        );
    }

    #[test]
    fn test_parse_requires_each_mandatory_field() {
        for field in ["ingredients", "nutrition", "healthScore"] {
            let mut value = complete_analysis();
            value.as_object_mut().unwrap().remove(field);
            assert_eq!(
                parse_meal_analysis(&value.to_string()),
                Err(CoreError::IncompleteAnalysis),
                "missing {field} should be incomplete"
            );
        }
    }

    #[test]
    fn test_parse_rejects_empty_ingredients() {
        let mut value = complete_analysis();
        value["ingredients"] = json!([]);
        assert_eq!(
            parse_meal_analysis(&value.to_string()),
            Err(CoreError::IncompleteAnalysis)
        );
    }

    #[test]
    fn test_parse_fills_only_delivery_defaults() {
        let input = complete_analysis();
        let analysis = parse_meal_analysis(&input.to_string()).unwrap();

        let mut expected = input;
        expected["delivery_recommendation"] = json!("");
        expected["delivery_options"] = json!([]);
        assert_eq!(serde_json::to_value(&analysis).unwrap(), expected);
    }

    #[test]
    fn test_parse_accepts_loosely_typed_fields() {
        let input = json!({
            "ingredients": ["rice", { "name": "egg" }],
            "nutrition": { "calories": "500 kcal", "protein": 30, "carbs": 55.5, "fat": null },
            "allergens": "none",
            "healthScore": "7",
            "confidence": null,
            "portion_analysis": null,
            "delivery_options": [{ "platform": "UberEats", "eta_minutes": 22.5 }],
            "cuisine": "Chinese"
        });

        let analysis = parse_meal_analysis(&input.to_string()).unwrap();

        let mut expected = input;
        expected["delivery_recommendation"] = json!("");
        assert_eq!(serde_json::to_value(&analysis).unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_falsy_health_score() {
        for score in [json!(0), json!(""), json!(false), json!(null)] {
            let mut value = complete_analysis();
            value["healthScore"] = score;
            assert_eq!(
                parse_meal_analysis(&value.to_string()),
                Err(CoreError::IncompleteAnalysis)
            );
        }
    }

    #[test]
    fn test_parse_keeps_model_delivery_fields() {
        let mut value = complete_analysis();
        value["delivery_recommendation"] = json!("Travels well");
        value["delivery_options"] = json!([{ "platform": "DoorDash", "cost_estimate": "$8-12" }]);

        let analysis = parse_meal_analysis(&value.to_string()).unwrap();
        assert_eq!(analysis.get("delivery_recommendation"), Some(&json!("Travels well")));
        assert_eq!(
            analysis.get("delivery_options"),
            Some(&json!([{ "platform": "DoorDash", "cost_estimate": "$8-12" }]))
        );
    }

    #[test]
    fn test_parse_does_not_clamp_scores() {
        let mut value = complete_analysis();
        value["healthScore"] = json!(14);
        value["confidence"] = json!(1.7);

        let analysis = parse_meal_analysis(&value.to_string()).unwrap();
        assert_eq!(analysis.get("healthScore"), Some(&json!(14)));
        assert_eq!(analysis.get("confidence"), Some(&json!(1.7)));
    }

    #[test]
    fn test_parse_rejects_non_object_reply() {
        assert_eq!(parse_meal_analysis("42"), Err(CoreError::IncompleteAnalysis));
    }
}
