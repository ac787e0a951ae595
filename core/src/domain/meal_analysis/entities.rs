use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DELIVERY_RECOMMENDATION: &str = "delivery_recommendation";
pub const DELIVERY_OPTIONS: &str = "delivery_options";

/// Nutrition facts, allergens and suggestions returned by the vision model.
///
/// The record comes from untrusted model output and is kept as the JSON
/// object the model produced. Field types are not enforced; only the
/// presence checks in [`super::extraction`] and the two delivery defaults
/// apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealAnalysis(Map<String, Value>);

impl MealAnalysis {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// String entries of the `allergens` array. Anything else is skipped.
    pub fn allergens(&self) -> Vec<&str> {
        self.0
            .get("allergens")
            .and_then(Value::as_array)
            .map(|allergens| allergens.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Appends to `warnings`, creating the array when it is missing or null.
    /// A non-array value is kept as the first entry.
    pub fn push_warning(&mut self, warning: String) {
        let warnings = self.0.entry("warnings").or_insert(Value::Null);

        if let Value::Array(entries) = warnings {
            entries.push(Value::String(warning));
            return;
        }

        let previous = warnings.take();
        *warnings = if previous.is_null() {
            Value::Array(vec![Value::String(warning)])
        } else {
            Value::Array(vec![previous, Value::String(warning)])
        };
    }

    /// Fills `delivery_recommendation` with `""` and `delivery_options` with
    /// `[]` when the model left them out or sent null.
    pub fn fill_delivery_defaults(&mut self) {
        for (key, default) in [
            (DELIVERY_RECOMMENDATION, Value::String(String::new())),
            (DELIVERY_OPTIONS, Value::Array(Vec::new())),
        ] {
            let entry = self.0.entry(key).or_insert(Value::Null);
            if entry.is_null() {
                *entry = default;
            }
        }
    }
}
