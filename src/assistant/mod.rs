use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::GenerationProfiles;
use crate::constraints::{self, DietaryRestriction};
use crate::errors::AssistantError;
use crate::format;
use crate::history::{HistoryLog, HistoryModule};
use crate::intent::{self, Choose, Intent, RandomChoice};
use crate::prompt;
use crate::provider::DynProvider;
use crate::recipe::{self, ParsedRecipe};
use crate::validate;
use crate::wire::{GenerationParams, GenerationRequest};

pub const NO_INGREDIENT_REPLY: &str =
    "I'm sorry, I couldn't identify a specific ingredient in your query.";
pub const NO_TECHNIQUE_REPLY: &str =
    "I'm sorry, I couldn't identify a specific cooking technique in your query.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealPlanRequest {
    pub daily_calories: u32,
    pub diet_preference: String,
    pub days: u32,
}

/// Chat, recipe generator and diet tracker over one generator connection.
///
/// Holds no per-request state; concurrent calls do not interact beyond the
/// history file, whose writes are serialized.
pub struct Assistant {
    provider: DynProvider,
    generation: GenerationProfiles,
    history: Option<Arc<HistoryLog>>,
    chooser: Box<dyn Choose>,
}

impl Assistant {
    pub fn new(provider: DynProvider, generation: GenerationProfiles) -> Self {
        Self {
            provider,
            generation,
            history: None,
            chooser: Box::new(RandomChoice),
        }
    }

    pub fn with_history(mut self, history: HistoryLog) -> Self {
        self.history = Some(Arc::new(history));
        self
    }

    pub fn with_chooser(mut self, chooser: impl Choose + 'static) -> Self {
        self.chooser = Box::new(chooser);
        self
    }

    /// Answer one chat message.
    pub async fn respond(&self, utterance: &str) -> Result<String, AssistantError> {
        let utterance = utterance.trim();
        if utterance.is_empty() {
            return Err(AssistantError::InvalidInput("Please enter a message.".into()));
        }

        let detected = intent::classify(&utterance.to_lowercase());
        info!(intent = ?detected, "classified chat message");

        let reply = match detected {
            Intent::Recipe => self.recipe_reply(utterance).await?,
            Intent::CookingTip => format::format_cooking_tip(intent::cooking_tip(self.chooser.as_ref())),
            Intent::IngredientInfo => match intent::ingredient_subject(utterance) {
                Some(ingredient) => {
                    self.call(prompt::ingredient_info_prompt(ingredient), self.generation.ingredient_info)
                        .await?
                }
                None => NO_INGREDIENT_REPLY.to_string(),
            },
            Intent::CookingTechnique => match intent::technique_subject(utterance) {
                Some(technique) => {
                    self.call(prompt::technique_prompt(technique), self.generation.technique)
                        .await?
                }
                None => NO_TECHNIQUE_REPLY.to_string(),
            },
            Intent::Generic => intent::generic_response(self.chooser.as_ref()).to_string(),
        };

        self.record(HistoryModule::Chatbot, format!("User: {utterance} - Bot: {reply}"))
            .await;
        Ok(reply)
    }

    /// extract -> prompt -> generate -> parse -> validate -> format
    async fn recipe_reply(&self, utterance: &str) -> Result<String, AssistantError> {
        let constraints = constraints::extract(utterance);
        if constraints.is_empty() {
            debug!("no recipe constraints in request");
        } else {
            debug!(?constraints, "extracted recipe constraints");
        }

        let text = self
            .call(prompt::recipe_prompt(&constraints), self.generation.recipe)
            .await?;
        let parsed = recipe::parse_sections(&text);
        let verdict = validate::validate(&parsed, &constraints);
        info!(valid = verdict.is_valid, issues = verdict.issues.len(), "validated generated recipe");

        Ok(if verdict.is_valid {
            format::format_recipe(&parsed)
        } else {
            format::format_adjustment_message(&verdict)
        })
    }

    /// Recipe generator form: free ingredient list, optional dietary tag, no validation.
    pub async fn generate_recipe(
        &self,
        ingredients: &str,
        dietary: Option<DietaryRestriction>,
    ) -> Result<ParsedRecipe, AssistantError> {
        let ingredients = ingredients.trim();
        if ingredients.is_empty() {
            return Err(AssistantError::InvalidInput("Please enter some ingredients first.".into()));
        }

        let text = self
            .call(prompt::ingredients_recipe_prompt(ingredients, dietary), self.generation.recipe)
            .await?;
        let parsed = recipe::parse_sections(&text);

        let label = if parsed.title.is_empty() { "Untitled recipe" } else { parsed.title.as_str() };
        self.record(
            HistoryModule::RecipeGenerator,
            format!("Ingredients: {ingredients} - Recipe: {label}"),
        )
        .await;
        Ok(parsed)
    }

    pub async fn track_nutrition(&self, food: &str, servings: u32) -> Result<String, AssistantError> {
        let food = food.trim();
        if food.is_empty() {
            return Err(AssistantError::InvalidInput("Please enter a food item".into()));
        }
        if servings == 0 {
            return Err(AssistantError::InvalidInput("Servings must be at least 1".into()));
        }

        let text = self
            .call(prompt::nutrition_prompt(food, servings), self.generation.nutrition)
            .await?;
        self.record(HistoryModule::CalorieTracker, format!("{food}: {text}"))
            .await;
        Ok(text)
    }

    pub async fn plan_meals(&self, req: &MealPlanRequest) -> Result<String, AssistantError> {
        if req.daily_calories == 0 {
            return Err(AssistantError::InvalidInput("Please enter your daily calorie goal.".into()));
        }
        if req.days == 0 {
            return Err(AssistantError::InvalidInput("Number of days must be at least 1".into()));
        }
        let diet = match req.diet_preference.trim() {
            "" => "balanced",
            d => d,
        };

        let text = self
            .call(prompt::meal_plan_prompt(req.days, diet, req.daily_calories), self.generation.meal_plan)
            .await?;
        self.record(
            HistoryModule::MealPlanner,
            format!("{}-day {} plan at {} kcal: {}", req.days, diet, req.daily_calories, text),
        )
        .await;
        Ok(text)
    }

    async fn call(&self, prompt: String, params: GenerationParams) -> Result<String, AssistantError> {
        debug!(provider = self.provider.name(), %prompt, "sending prompt");
        let req = GenerationRequest { prompt, params };
        self.provider.generate(&req).await
    }

    /// Appends run on the blocking pool. A failed write is logged, never returned.
    async fn record(&self, module: HistoryModule, entry: String) {
        let Some(history) = self.history.clone() else {
            return;
        };
        let path = history.path().to_path_buf();
        match tokio::task::spawn_blocking(move || history.append(module, &entry)).await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => {
                warn!(error = %e, module = module.tag(), path = %path.display(), "failed to write history")
            }
            Err(e) => {
                warn!(error = %e, module = module.tag(), path = %path.display(), "history writer did not finish")
            }
        }
    }
}
