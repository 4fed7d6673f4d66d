use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod assistant;
mod cli;
mod config;
mod constraints;
mod errors;
mod format;
mod history;
mod intent;
mod prompt;
mod provider;
mod recipe;
mod ux;
mod validate;
mod wire;

use assistant::{Assistant, MealPlanRequest};
use cli::Command;
use errors::AssistantError;
use history::{HistoryLog, HistoryModule};
use intent::Intent;

fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// User-facing text for a failed operation. Input problems are shown as-is.
fn failure_message(what: &str, err: &AssistantError) -> String {
    match err {
        AssistantError::InvalidInput(msg) => msg.clone(),
        other => format!("Sorry, I couldn't {what}. Error: {other}"),
    }
}

fn chat_labels(message: &str) -> (&'static str, &'static str) {
    match intent::classify(&message.to_lowercase()) {
        Intent::Recipe => ("Generating recipe... Please wait.", "generate a recipe"),
        Intent::IngredientInfo => ("Looking up ingredient...", "find information about that ingredient"),
        Intent::CookingTechnique => ("Looking up technique...", "find information about that technique"),
        Intent::CookingTip | Intent::Generic => ("Thinking...", "answer that"),
    }
}

async fn chat_once(bot: &Assistant, message: &str) -> bool {
    let (busy, what) = chat_labels(message);
    let pb = ux::spinner(busy);
    let res = bot.respond(message).await;
    pb.finish_and_clear();
    match res {
        Ok(reply) => {
            ux::print_bot(&reply);
            true
        }
        Err(e) => {
            ux::print_error(&failure_message(what, &e));
            false
        }
    }
}

async fn chat_loop(bot: &Assistant) -> anyhow::Result<()> {
    println!("Cooking assistant ready. Type 'exit' to quit.\n");
    let stdin = io::stdin();
    loop {
        print!("You: ");
        io::stdout().flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("failed to read stdin")? == 0 {
            break;
        }
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }
        chat_once(bot, message).await;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = cli::Args::parse();
    init_tracing(args.debug);

    let mut cfg = match &args.config {
        Some(path) => config::Config::load(Path::new(path))?,
        None => config::Config::default(),
    };
    if let Some(kind) = args.provider {
        cfg.provider = kind;
    }
    if let Some(model) = &args.model {
        cfg.model = model.clone();
    }
    if args.no_history {
        cfg.history_enabled = false;
    }

    if let Command::History { module } = &args.command {
        let log = HistoryLog::new(&cfg.history_path);
        ux::print_history(&log.read_all()?, module.map(HistoryModule::tag));
        return Ok(ExitCode::SUCCESS);
    }

    let provider = provider::make_provider(&cfg)?;
    tracing::info!(provider = provider.name(), model = %cfg.model, "generator ready");
    let mut bot = Assistant::new(provider, cfg.generation.clone());
    if cfg.history_enabled {
        bot = bot.with_history(HistoryLog::new(&cfg.history_path));
    }

    let ok = match args.command {
        Command::Chat { message: Some(message) } => chat_once(&bot, &message).await,
        Command::Chat { message: None } => {
            chat_loop(&bot).await?;
            true
        }
        Command::Recipe { ingredients, dietary } => {
            let pb = ux::spinner("Generating recipe... Please wait.");
            let res = bot.generate_recipe(&ingredients, dietary).await;
            pb.finish_and_clear();
            match res {
                Ok(recipe) => {
                    ux::print_recipe(&recipe);
                    true
                }
                Err(e) => {
                    ux::print_error(&failure_message("generate a recipe", &e));
                    false
                }
            }
        }
        Command::Nutrition { food, servings } => {
            let pb = ux::spinner("Analyzing nutrition...");
            let res = bot.track_nutrition(&food, servings).await;
            pb.finish_and_clear();
            match res {
                Ok(text) => {
                    println!("{food} Nutrition\n\n{text}");
                    true
                }
                Err(e) => {
                    ux::print_error(&failure_message("fetch nutrition data", &e));
                    false
                }
            }
        }
        Command::MealPlan { calories, diet, days } => {
            let req = MealPlanRequest { daily_calories: calories, diet_preference: diet, days };
            let pb = ux::spinner("Planning meals...");
            let res = bot.plan_meals(&req).await;
            pb.finish_and_clear();
            match res {
                Ok(text) => {
                    println!("Weekly Meal Plan\n\n{text}");
                    true
                }
                Err(e) => {
                    ux::print_error(&failure_message("fetch the meal plan", &e));
                    false
                }
            }
        }
        Command::History { .. } => true,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_shown_verbatim() {
        let err = AssistantError::InvalidInput("Please enter a food item".into());
        assert_eq!(failure_message("fetch nutrition data", &err), "Please enter a food item");
    }

    #[test]
    fn generator_errors_are_wrapped() {
        let err = AssistantError::Status { status: 500, body: "boom".into() };
        assert_eq!(
            failure_message("generate a recipe", &err),
            "Sorry, I couldn't generate a recipe. Error: generator returned HTTP 500: boom"
        );
    }

    #[test]
    fn recipe_chat_gets_recipe_labels() {
        assert_eq!(chat_labels("Suggest a recipe").1, "generate a recipe");
        assert_eq!(chat_labels("hello").0, "Thinking...");
    }
}
