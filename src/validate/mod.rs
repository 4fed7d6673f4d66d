use crate::constraints::{Constraints, DietaryRestriction};
use crate::recipe::ParsedRecipe;

const ANIMAL_PRODUCTS: &[&str] = &[
    "egg", "milk", "cheese", "butter", "cream", "meat", "chicken", "fish", "beef", "pork",
];
const MEAT_PRODUCTS: &[&str] = &["meat", "chicken", "fish", "beef", "pork"];
const GLUTEN_SOURCES: &[&str] = &["wheat", "flour", "bread", "pasta", "couscous", "semolina"];
const DAIRY_PRODUCTS: &[&str] = &["milk", "cheese", "butter", "cream", "yogurt"];

/// Ingredient substrings that disqualify a recipe for a dietary tag.
///
/// Low-carb and keto have no entry, so they never produce a dietary issue.
pub fn violation_table(restriction: DietaryRestriction) -> &'static [&'static str] {
    match restriction {
        DietaryRestriction::Vegan => ANIMAL_PRODUCTS,
        DietaryRestriction::Vegetarian => MEAT_PRODUCTS,
        DietaryRestriction::GlutenFree => GLUTEN_SOURCES,
        DietaryRestriction::DairyFree => DAIRY_PRODUCTS,
        DietaryRestriction::LowCarb | DietaryRestriction::Keto => &[],
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub issues: Vec<String>,
}

/// Check a parsed recipe against the request's constraints.
///
/// All comparisons are case-insensitive substring tests against the ingredient
/// lines; "butter" does not satisfy or violate a constraint named "dairy".
/// Issues come out in a fixed order: missing, excluded, dietary.
pub fn validate(recipe: &ParsedRecipe, constraints: &Constraints) -> ValidationResult {
    let ingredients: Vec<String> = recipe.ingredients.iter().map(|i| i.to_lowercase()).collect();
    let mentioned = |name: &str| {
        let needle = name.to_lowercase();
        ingredients.iter().any(|line| line.contains(&needle))
    };

    let mut issues = Vec::new();

    let missing: Vec<&str> = constraints
        .required_ingredients
        .iter()
        .map(String::as_str)
        .filter(|name| !mentioned(*name))
        .collect();
    if !missing.is_empty() {
        issues.push(format!("Missing required ingredients: {}", missing.join(", ")));
    }

    let excluded: Vec<&str> = constraints
        .excluded_ingredients
        .iter()
        .map(String::as_str)
        .filter(|name| mentioned(*name))
        .collect();
    if !excluded.is_empty() {
        issues.push(format!("Contains excluded ingredients: {}", excluded.join(", ")));
    }

    if let Some(restriction) = constraints.dietary_restriction {
        let violations = dietary_violations(recipe, restriction);
        if !violations.is_empty() {
            issues.push(format!(
                "Dietary restriction violations: {}",
                violations.join(", ")
            ));
        }
    }

    ValidationResult {
        is_valid: issues.is_empty(),
        issues,
    }
}

/// Entries of the violation table that occur in any ingredient line, in table order.
pub fn dietary_violations(
    recipe: &ParsedRecipe,
    restriction: DietaryRestriction,
) -> Vec<&'static str> {
    let ingredients: Vec<String> = recipe.ingredients.iter().map(|i| i.to_lowercase()).collect();
    violation_table(restriction)
        .iter()
        .copied()
        .filter(|product| ingredients.iter().any(|line| line.contains(product)))
        .collect()
}
