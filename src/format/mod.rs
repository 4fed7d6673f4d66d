//! Display strings for chat replies.
//!
//! Markup understood by the UI layer: `*text*` is emphasis, `•` starts a
//! bullet and `N.` starts a numbered step.

use crate::recipe::ParsedRecipe;
use crate::validate::ValidationResult;

pub fn format_recipe(recipe: &ParsedRecipe) -> String {
    let title = if recipe.title.is_empty() { "Delicious Recipe" } else { recipe.title.as_str() };
    let mut out = format!("*{title}*\n\n");

    out.push_str("*Ingredients:*\n");
    if recipe.ingredients.is_empty() {
        out.push_str("• No ingredients specified\n");
    }
    for ingredient in &recipe.ingredients {
        out.push_str(&format!("• {ingredient}\n"));
    }

    out.push_str("\n*Instructions:*\n");
    if recipe.instructions.is_empty() {
        out.push_str("1. No instructions provided\n");
    }
    for (i, step) in recipe.instructions.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, step));
    }

    if !recipe.tips.is_empty() {
        out.push_str("\n*Tips:*\n");
        for tip in &recipe.tips {
            out.push_str(&format!("• {tip}\n"));
        }
    }

    out
}

/// Reply used instead of the recipe when validation fails.
pub fn format_adjustment_message(result: &ValidationResult) -> String {
    let mut out = String::from("*Recipe Adjustment Needed*\n\n");
    out.push_str("I found some issues with the generated recipe:\n");
    for issue in &result.issues {
        out.push_str(&format!("• {issue}\n"));
    }
    out.push_str(
        "\n*Recommendation:* Please provide more specific ingredients or try a different recipe request.",
    );
    out
}

pub fn format_cooking_tip(tip: &str) -> String {
    format!("*Cooking Tip:* {tip}")
}
