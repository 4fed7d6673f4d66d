use clap::ValueEnum;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static WITH_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bwith\s+(.*)").expect("with-clause regex"));
static NO_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bno\s+(.*)").expect("no-clause regex"));
static STAPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(chicken|beef|fish|vegetables|pasta|rice)\b").expect("staple regex")
});

/// Dietary tags a recipe request may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum DietaryRestriction {
    Vegan,
    Vegetarian,
    GlutenFree,
    DairyFree,
    LowCarb,
    Keto,
}

impl DietaryRestriction {
    /// Detection order: the first tag found in an utterance wins.
    pub const ALL: [DietaryRestriction; 6] = [
        DietaryRestriction::Vegan,
        DietaryRestriction::Vegetarian,
        DietaryRestriction::GlutenFree,
        DietaryRestriction::DairyFree,
        DietaryRestriction::LowCarb,
        DietaryRestriction::Keto,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DietaryRestriction::Vegan => "vegan",
            DietaryRestriction::Vegetarian => "vegetarian",
            DietaryRestriction::GlutenFree => "gluten-free",
            DietaryRestriction::DairyFree => "dairy-free",
            DietaryRestriction::LowCarb => "low-carb",
            DietaryRestriction::Keto => "keto",
        }
    }
}

impl fmt::Display for DietaryRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a recipe request asks for. Extraction is best-effort; empty is normal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    pub required_ingredients: Vec<String>,
    pub excluded_ingredients: Vec<String>,
    pub dietary_restriction: Option<DietaryRestriction>,
}

impl Constraints {
    pub fn is_empty(&self) -> bool {
        self.required_ingredients.is_empty()
            && self.excluded_ingredients.is_empty()
            && self.dietary_restriction.is_none()
    }
}

/// Pull required / excluded ingredients and a dietary tag out of a raw utterance.
///
/// The "with ..." and "no ..." passes run independently over the same text. When
/// the exclusion clause sits inside the "with" capture, the required list stops
/// where the exclusion begins, so "pasta with tomatoes, no cheese" requires only
/// tomatoes.
pub fn extract(utterance: &str) -> Constraints {
    let exclusion = NO_CLAUSE.captures(utterance);
    let exclusion_start = exclusion
        .as_ref()
        .and_then(|c| c.get(0))
        .map(|m| m.start());

    let required_ingredients = match WITH_CLAUSE.captures(utterance).and_then(|c| c.get(1)) {
        Some(m) => {
            let end = exclusion_start
                .filter(|&start| start >= m.start())
                .unwrap_or(m.end());
            split_list(&utterance[m.start()..end])
        }
        None => STAPLE
            .captures(utterance)
            .and_then(|c| c.get(1))
            .map(|m| split_list(m.as_str()))
            .unwrap_or_default(),
    };

    let excluded_ingredients = exclusion
        .as_ref()
        .and_then(|c| c.get(1))
        .map(|m| split_list(m.as_str()))
        .unwrap_or_default();

    Constraints {
        required_ingredients,
        excluded_ingredients,
        dietary_restriction: detect_dietary(utterance),
    }
}

/// First dietary tag that appears anywhere in the utterance.
pub fn detect_dietary(utterance: &str) -> Option<DietaryRestriction> {
    let lower = utterance.to_lowercase();
    DietaryRestriction::ALL
        .into_iter()
        .find(|diet| lower.contains(diet.as_str()))
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
