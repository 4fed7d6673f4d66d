use crate::constraints::{Constraints, DietaryRestriction};

/// The section layout every recipe prompt asks for. The recipe parser keys on
/// these exact headers.
fn recipe_format() -> &'static str {
r#"Format the response with clear sections:
Title: [Creative Recipe Name]
Ingredients:
• List all ingredients with precise measurements
Instructions:
1. Detailed, step-by-step cooking instructions
Tips:
• Helpful cooking advice or recipe variations

Make the recipe engaging, easy to follow, and delicious."#
}

/// Prompt for a chat recipe request. Constraint clauses are only added when present.
pub fn recipe_prompt(constraints: &Constraints) -> String {
    let mut prompt = if constraints.required_ingredients.is_empty() {
        "Create a detailed and creative recipe".to_string()
    } else {
        format!(
            "Create a detailed and creative recipe featuring {}",
            constraints.required_ingredients.join(", ")
        )
    };

    if !constraints.excluded_ingredients.is_empty() {
        prompt.push_str(&format!(
            " that does NOT include {}",
            constraints.excluded_ingredients.join(", ")
        ));
    }
    prompt.push('.');

    if let Some(diet) = constraints.dietary_restriction {
        prompt.push_str(&format!(" Ensure the recipe is {diet}."));
    }

    format!("{prompt}\n\n{format}", format = recipe_format())
}

/// Prompt for the recipe generator form: a free ingredient list and an optional tag.
pub fn ingredients_recipe_prompt(ingredients: &str, dietary: Option<DietaryRestriction>) -> String {
    let mut prompt = format!("Create a detailed recipe using these ingredients: {}.", ingredients.trim());
    if let Some(diet) = dietary {
        prompt.push_str(&format!(" The recipe should be {diet}."));
    }
    format!("{prompt}\n\n{format}", format = recipe_format())
}

pub fn ingredient_info_prompt(ingredient: &str) -> String {
    format!(
r#"Provide comprehensive information about {ingredient}:
• Culinary uses
• Nutritional benefits
• Interesting cooking tips
• How to select and store
• A quick, simple recipe idea featuring this ingredient"#
    )
}

pub fn technique_prompt(technique: &str) -> String {
    format!(
r#"Explain the {technique} cooking technique in detail:
• What is the {technique} technique?
• Step-by-step how to perform this technique
• Best foods to use this technique with
• Common mistakes to avoid
• Pro tips for mastering this technique"#
    )
}

pub fn nutrition_prompt(food: &str, servings: u32) -> String {
    format!(
r#"Provide detailed nutritional information for {servings} serving(s) of {food}. Include:
1. Calories
2. Macronutrients (protein, carbs, fat)
3. Key micronutrients
4. Health benefits
5. Serving size details
Format the response as a clear, easy-to-read list."#
    )
}

pub fn meal_plan_prompt(days: u32, diet_preference: &str, daily_calories: u32) -> String {
    format!(
r#"Create a {days}-day meal plan for a {diet_preference} diet, adhering to a daily calorie goal of {daily_calories} calories.
Include breakfast, lunch, dinner, and snack options, with meals that align with the specified calorie intake and diet preference.
Format each day's meal suggestions in a list format."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::parse_sections;

    #[test]
    fn bare_request_has_no_constraint_clauses() {
        let prompt = recipe_prompt(&Constraints::default());
        assert!(prompt.starts_with("Create a detailed and creative recipe.\n"));
        assert!(!prompt.contains("NOT include"));
        assert!(!prompt.contains("Ensure the recipe is"));
    }

    #[test]
    fn constraint_clauses_are_appended() {
        let constraints = Constraints {
            required_ingredients: vec!["chicken".into(), "rice".into()],
            excluded_ingredients: vec!["peanuts".into()],
            dietary_restriction: Some(DietaryRestriction::GlutenFree),
        };
        let prompt = recipe_prompt(&constraints);
        assert!(prompt.starts_with(
            "Create a detailed and creative recipe featuring chicken, rice that does NOT include peanuts. Ensure the recipe is gluten-free."
        ));
    }

    #[test]
    fn every_recipe_prompt_requests_the_four_sections() {
        for prompt in [
            recipe_prompt(&Constraints::default()),
            ingredients_recipe_prompt("eggs, spinach", Some(DietaryRestriction::Vegetarian)),
        ] {
            for header in ["Title:", "Ingredients:", "Instructions:", "Tips:"] {
                assert!(prompt.contains(header), "missing {header}");
            }
        }
    }

    #[test]
    fn simple_generator_prompt() {
        let prompt = ingredients_recipe_prompt("  eggs, spinach ", Some(DietaryRestriction::Keto));
        assert!(prompt.starts_with(
            "Create a detailed recipe using these ingredients: eggs, spinach. The recipe should be keto."
        ));
    }

    #[test]
    fn answer_in_requested_format_parses_back() {
        let prompt = recipe_prompt(&Constraints::default());
        assert!(prompt.contains("Title:"));

        let answer = "Title: Spinach Omelette\n\
            Ingredients:\n\
            • 3 eggs\n\
            • 1 handful spinach\n\
            Instructions:\n\
            1. Whisk the eggs.\n\
            2. Cook with the spinach.\n\
            Tips:\n\
            • Serve hot.";
        let recipe = parse_sections(answer);
        assert_eq!(recipe.title, "Spinach Omelette");
        assert!(!recipe.ingredients.is_empty());
        assert!(!recipe.instructions.is_empty());
    }

    #[test]
    fn auxiliary_prompts_embed_their_subject() {
        assert!(ingredient_info_prompt("garlic").starts_with("Provide comprehensive information about garlic:"));
        assert!(technique_prompt("dice").contains("What is the dice technique?"));
        assert!(nutrition_prompt("apple", 2).contains("2 serving(s) of apple"));
        assert!(meal_plan_prompt(5, "vegan", 1800).starts_with("Create a 5-day meal plan for a vegan diet"));
    }
}
