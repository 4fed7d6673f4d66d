use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

const RECIPE_KEYWORDS: &[&str] = &[
    "recipe",
    "cook",
    "make",
    "create a dish",
    "what can i make with",
    "cooking suggestion",
    "how to make",
    "dinner idea",
    "lunch recipe",
];
const TIP_KEYWORDS: &[&str] = &[
    "cooking tip",
    "kitchen hack",
    "advice",
    "how to cook",
    "cooking technique",
];
const INGREDIENT_QUERIES: &[&str] = &["about", "tell me about", "information on", "how to use", "what is"];
const INGREDIENT_SUBJECTS: &[&str] = &["ingredient", "food", "spice"];
const TECHNIQUE_QUERIES: &[&str] = &["how to", "technique", "method", "best way to", "proper way"];
const TECHNIQUE_ACTIONS: &[&str] = &["chop", "slice", "cook", "bake", "fry"];

pub const COOKING_TIPS: &[&str] = &[
    "Always preheat your oven before baking.",
    "Use sharp knives for safer and more precise cutting.",
    "Let meat rest after cooking to retain juices.",
    "Season your food in layers for more depth of flavor.",
    "Use a meat thermometer to check doneness accurately.",
    "Keep your workspace clean and organized while cooking.",
    "Taste your food as you cook and adjust seasoning.",
    "Rest pasta in hot water for a minute after draining to prevent sticking.",
];

pub const GENERIC_RESPONSES: &[&str] = &[
    "I'm your cooking assistant! Ask me about recipes, ingredients, or cooking techniques.",
    "Need help in the kitchen? I can suggest recipes, provide cooking tips, or explain ingredients.",
    "Feeling hungry? I can help you find a delicious recipe or cooking advice!",
    "From recipe ideas to cooking techniques, I'm here to help you create amazing meals.",
];

static KNOWN_INGREDIENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(chicken|beef|fish|tomato|onion|garlic|potato|carrot)\b")
        .expect("ingredient regex")
});
static KNOWN_TECHNIQUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(chop|slice|dice|mince|bake|fry|grill|roast)\b").expect("technique regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Recipe,
    CookingTip,
    IngredientInfo,
    CookingTechnique,
    Generic,
}

/// Classify a lower-cased utterance. Categories are tried in priority order and
/// the first hit wins.
pub fn classify(normalized: &str) -> Intent {
    let has_any = |words: &[&str]| words.iter().any(|w| normalized.contains(w));

    if has_any(RECIPE_KEYWORDS) {
        Intent::Recipe
    } else if has_any(TIP_KEYWORDS) {
        Intent::CookingTip
    } else if has_any(INGREDIENT_QUERIES) && has_any(INGREDIENT_SUBJECTS) {
        Intent::IngredientInfo
    } else if has_any(TECHNIQUE_QUERIES) && has_any(TECHNIQUE_ACTIONS) {
        Intent::CookingTechnique
    } else {
        Intent::Generic
    }
}

/// Source of the random pick for tips and fallback replies.
pub trait Choose: Send + Sync {
    /// Index in `0..len`; `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RandomChoice;

impl Choose for RandomChoice {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

pub fn cooking_tip(chooser: &dyn Choose) -> &'static str {
    COOKING_TIPS[chooser.pick(COOKING_TIPS.len()) % COOKING_TIPS.len()]
}

pub fn generic_response(chooser: &dyn Choose) -> &'static str {
    GENERIC_RESPONSES[chooser.pick(GENERIC_RESPONSES.len()) % GENERIC_RESPONSES.len()]
}

/// The ingredient an info request is about, as written by the user.
pub fn ingredient_subject(utterance: &str) -> Option<&str> {
    KNOWN_INGREDIENT
        .captures(utterance)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// The technique a how-to request names, as written by the user.
pub fn technique_subject(utterance: &str) -> Option<&str> {
    KNOWN_TECHNIQUE
        .captures(utterance)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
pub(crate) struct FixedChoice(pub usize);

#[cfg(test)]
impl Choose for FixedChoice {
    fn pick(&self, _len: usize) -> usize {
        self.0
    }
}
