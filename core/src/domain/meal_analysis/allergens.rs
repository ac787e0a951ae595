use crate::domain::meal_analysis::entities::MealAnalysis;

/// Model-reported allergens that contain one of the user's declared
/// allergies, compared case-insensitively. Declarations are used as given.
pub fn matched_allergens<'a>(detected: &[&'a str], declared: &[String]) -> Vec<&'a str> {
    let declared: Vec<String> = declared
        .iter()
        .map(|allergy| allergy.to_lowercase())
        .collect();

    detected
        .iter()
        .copied()
        .filter(|allergen| {
            let allergen = allergen.to_lowercase();
            declared
                .iter()
                .any(|allergy| allergen.contains(allergy.as_str()))
        })
        .collect()
}

pub fn allergen_warning(matched: &[&str]) -> String {
    format!(
        "⚠️ ALLERGEN ALERT: This meal may contain {} which you've marked as allergies.",
        matched.join(", ")
    )
}

/// Appends a single aggregate warning when any declared allergy matches.
/// Returns whether a warning was added.
pub fn annotate_allergens(analysis: &mut MealAnalysis, declared: &[String]) -> bool {
    let warning = {
        let detected = analysis.allergens();
        let matched = matched_allergens(&detected, declared);
        if matched.is_empty() {
            return false;
        }
        allergen_warning(&matched)
    };

    analysis.push_warning(warning);

    true
}
