use regex::Regex;
use std::sync::LazyLock;

/// Leading list markers: bullets (`-`, `•`, `*`) or a leading numeral with an
/// optional separator. A decimal numeral is stripped whole, never split at the point.
static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[-•*]+|\d+(?:\.\d+)?[.):\-]?)\s*").expect("list marker regex")
});

/// A recipe recovered from the generator's free-text answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Ingredients,
    Instructions,
    Tips,
}

impl ParsedRecipe {
    fn section_mut(&mut self, section: Section) -> &mut Vec<String> {
        match section {
            Section::Ingredients => &mut self.ingredients,
            Section::Instructions => &mut self.instructions,
            Section::Tips => &mut self.tips,
        }
    }
}

/// Split a generator response into title / ingredients / instructions / tips.
///
/// Header detection is a case-insensitive substring test, not an anchored match,
/// so a line such as "Serving tips: ..." switches to the tips section even when
/// it is prose. Lines seen before the first section header are dropped, except
/// for the title line which is recognised anywhere.
pub fn parse_sections(text: &str) -> ParsedRecipe {
    let mut recipe = ParsedRecipe::default();
    let mut current: Option<Section> = None;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let lower = line.to_lowercase();

        if lower.contains("title:") {
            // Only the first colon separates; later ones belong to the title.
            if let Some((_, rest)) = line.split_once(':') {
                recipe.title = rest.trim().to_string();
            }
        } else if lower.contains("ingredients:") {
            current = Some(Section::Ingredients);
        } else if lower.contains("instructions:") {
            current = Some(Section::Instructions);
        } else if lower.contains("tips:") {
            current = Some(Section::Tips);
        } else if let Some(section) = current {
            let item = strip_list_marker(line);
            recipe.section_mut(section).push(item.to_string());
        }
    }

    recipe
}

/// Remove a leading bullet or step number; unmarked lines come back unchanged.
fn strip_list_marker(line: &str) -> &str {
    match LIST_MARKER.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Here is something tasty for you!\n\
        \n\
        Title: Lemon Garlic Chicken\n\
        Ingredients:\n\
        • 2 chicken breasts\n\
        - 3 cloves garlic\n\
        * 1 lemon\n\
        \n\
        Instructions:\n\
        1. Preheat the oven to 200C.\n\
        2) Season the chicken.\n\
        Bake for 25 minutes.\n\
        Tips:\n\
        • Rest the chicken before slicing.\n";

    #[test]
    fn parses_all_sections_in_order() {
        let recipe = parse_sections(SAMPLE);
        assert_eq!(recipe.title, "Lemon Garlic Chicken");
        assert_eq!(
            recipe.ingredients,
            vec!["2 chicken breasts", "3 cloves garlic", "1 lemon"]
        );
        assert_eq!(
            recipe.instructions,
            vec![
                "Preheat the oven to 200C.",
                "Season the chicken.",
                "Bake for 25 minutes."
            ]
        );
        assert_eq!(recipe.tips, vec!["Rest the chicken before slicing."]);
    }

    #[test]
    fn title_keeps_everything_after_first_colon() {
        let recipe = parse_sections("Title: Soup: A Winter Story  ");
        assert_eq!(recipe.title, "Soup: A Winter Story");
    }

    #[test]
    fn header_match_is_case_insensitive() {
        let recipe = parse_sections("TITLE: Toast\nINGREDIENTS:\n- bread\nTIPS:\n- butter it");
        assert_eq!(recipe.title, "Toast");
        assert_eq!(recipe.ingredients, vec!["bread"]);
        assert_eq!(recipe.tips, vec!["butter it"]);
    }

    #[test]
    fn preamble_before_any_header_is_discarded() {
        let recipe = parse_sections("Sure!\n- not an ingredient\nIngredients:\n- rice");
        assert_eq!(recipe.ingredients, vec!["rice"]);
        assert!(recipe.instructions.is_empty());
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let recipe = parse_sections("Just some chatter with no structure.");
        assert_eq!(recipe, ParsedRecipe::default());
    }

    #[test]
    fn header_keyword_mid_sentence_switches_section() {
        let text = "Ingredients:\n- flour\nA few serving tips: keep it warm\n- dust with sugar";
        let recipe = parse_sections(text);
        assert_eq!(recipe.ingredients, vec!["flour"]);
        assert_eq!(recipe.tips, vec!["dust with sugar"]);
    }

    #[test]
    fn leading_numerals_are_stripped_with_their_separator() {
        let recipe = parse_sections(
            "Ingredients:\n2 eggs\n1.5 cups flour\n10. extra yolk\n3- pinches salt\n\
             Instructions:\n1 Preheat the oven\n2: Whisk\n",
        );
        assert_eq!(recipe.ingredients, vec!["eggs", "cups flour", "extra yolk", "pinches salt"]);
        assert_eq!(recipe.instructions, vec!["Preheat the oven", "Whisk"]);
    }

    #[test]
    fn bare_step_numbers_are_not_doubled_when_formatted() {
        let recipe = parse_sections("Instructions:\n1 Preheat the oven\n2 Bake");
        let shown = crate::format::format_recipe(&recipe);
        assert!(shown.contains("1. Preheat the oven\n2. Bake\n"), "{shown}");
    }
}
