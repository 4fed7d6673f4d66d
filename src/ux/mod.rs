use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use regex::{Captures, Regex};
use std::sync::LazyLock;
use std::time::Duration;

use crate::history::HistoryDocument;
use crate::recipe::ParsedRecipe;

static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("emphasis regex"));

/// Turn reply markup into terminal text: `*text*` spans become bold italics,
/// bullets and numbered steps are left as they are.
pub fn render_markup(message: &str) -> String {
    EMPHASIS
        .replace_all(message, |caps: &Captures| caps[1].bold().italic().to_string())
        .into_owned()
}

pub fn print_bot(message: &str) {
    println!("{} {}\n", "Bot:".green().bold(), render_markup(message));
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "Bot:".red().bold(), message);
}

/// Generator-form rendering: headings instead of chat markup.
pub fn print_recipe(recipe: &ParsedRecipe) {
    let title = if recipe.title.is_empty() { "Generated Recipe" } else { recipe.title.as_str() };
    println!("\n{}\n", title.bold());

    println!("{}", "Ingredients".yellow().bold());
    for ing in &recipe.ingredients {
        println!("  • {}", ing);
    }

    println!("\n{}", "Instructions".yellow().bold());
    for (i, step) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }

    if !recipe.tips.is_empty() {
        println!("\n{}", "Tips".cyan().bold());
        for tip in &recipe.tips {
            println!("  • {}", tip);
        }
    }
    println!();
}

pub fn print_history(doc: &HistoryDocument, only: Option<&str>) {
    let mut shown = 0usize;
    for (module, entries) in doc {
        if only.is_some_and(|m| m != module.as_str()) {
            continue;
        }
        println!("{}", format!("[{module}]").bold());
        for e in entries {
            println!("  {}  {}", e.timestamp.format("%Y-%m-%d %H:%M:%S").to_string().dimmed(), e.entry);
            shown += 1;
        }
    }
    if shown == 0 {
        println!("(no history)");
    }
}

/// Spinner shown while waiting on the generator. Hidden when stderr is not a terminal.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasis_markers_are_consumed() {
        colored::control::set_override(false);
        let out = render_markup("*Cooking Tip:* Rest the meat.\n• salt *to taste*");
        assert_eq!(out, "Cooking Tip: Rest the meat.\n• salt to taste");
    }

    #[test]
    fn lone_asterisk_is_left_alone() {
        colored::control::set_override(false);
        assert_eq!(render_markup("2 * 3 cups"), "2 * 3 cups");
    }
}
