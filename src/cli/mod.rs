use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::constraints::DietaryRestriction;
use crate::history::HistoryModule;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[value(alias = "google")]
    Gemini,
    Ollama,
}

#[derive(Parser, Debug)]
#[command(name = "kitchen_assistant", version, about = "Recipe chat, recipe generator and diet tracker backed by a generative-language API")]
pub struct Args {
    /// TOML or YAML config file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, value_enum, global = true)]
    pub provider: Option<ProviderKind>,

    #[arg(long, global = true)]
    pub model: Option<String>,

    #[arg(long, default_value_t = false, global = true)]
    pub debug: bool,

    /// Do not append to the history log
    #[arg(long, default_value_t = false, global = true)]
    pub no_history: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Talk to the cooking assistant; reads lines from stdin when no message is given
    Chat { message: Option<String> },

    /// Generate a recipe from a list of ingredients
    Recipe {
        #[arg(long)]
        ingredients: String,
        #[arg(long, value_enum)]
        dietary: Option<DietaryRestriction>,
    },

    /// Nutrition breakdown for a food item
    Nutrition {
        #[arg(long)]
        food: String,
        #[arg(long, default_value_t = 1)]
        servings: u32,
    },

    /// Multi-day meal plan for a calorie goal
    MealPlan {
        #[arg(long)]
        calories: u32,
        #[arg(long, default_value = "balanced")]
        diet: String,
        #[arg(long, default_value_t = 7)]
        days: u32,
    },

    /// Show saved history
    History {
        #[arg(long, value_enum)]
        module: Option<HistoryModule>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_recipe_command() {
        let args = Args::parse_from([
            "kitchen_assistant",
            "recipe",
            "--ingredients",
            "tofu, rice",
            "--dietary",
            "gluten-free",
            "--provider",
            "ollama",
        ]);
        assert_eq!(args.provider, Some(ProviderKind::Ollama));
        match args.command {
            Command::Recipe { ingredients, dietary } => {
                assert_eq!(ingredients, "tofu, rice");
                assert_eq!(dietary, Some(DietaryRestriction::GlutenFree));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn meal_plan_defaults() {
        let args = Args::parse_from(["kitchen_assistant", "meal-plan", "--calories", "2000"]);
        match args.command {
            Command::MealPlan { calories, diet, days } => {
                assert_eq!((calories, diet.as_str(), days), (2000, "balanced", 7));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
