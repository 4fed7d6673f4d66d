use anyhow::{bail, Context, Result};
use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::cli::ProviderKind;
use crate::wire::GenerationParams;

/// Sampling settings per call site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationProfiles {
    pub recipe: GenerationParams,
    pub ingredient_info: GenerationParams,
    pub technique: GenerationParams,
    pub nutrition: GenerationParams,
    pub meal_plan: GenerationParams,
}

impl Default for GenerationProfiles {
    fn default() -> Self {
        Self {
            recipe: GenerationParams::new(0.7, 1024),
            ingredient_info: GenerationParams::new(0.6, 512),
            technique: GenerationParams::new(0.6, 512),
            nutrition: GenerationParams::new(0.7, 800),
            meal_plan: GenerationParams::new(0.7, 1500),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderKind,
    pub model: String,
    pub api_base: String,
    /// Name of the environment variable holding the API key. The key itself is never stored here.
    pub api_key_env: String,
    pub ollama_url: String,
    pub timeout_secs: Option<u64>,
    pub history_enabled: bool,
    pub history_path: String,
    pub generation: GenerationProfiles,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Gemini,
            model: "gemini-1.5-flash-latest".into(),
            api_base: "https://generativelanguage.googleapis.com".into(),
            api_key_env: "GEMINI_API_KEY".into(),
            ollama_url: "http://localhost:11434".into(),
            timeout_secs: None,
            history_enabled: true,
            history_path: ".kitchen/history.json".into(),
            generation: GenerationProfiles::default(),
        }
    }
}

impl Config {
    /// Load from a TOML or YAML file, picked by extension. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("toml") => toml::from_str(&raw)
                .with_context(|| format!("invalid TOML config {}", path.display())),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&raw)
                .with_context(|| format!("invalid YAML config {}", path.display())),
            _ => bail!("unsupported config format: {} (use .toml or .yaml)", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_call_sites() {
        let cfg = Config::default();
        assert_eq!(cfg.provider, ProviderKind::Gemini);
        assert_eq!(cfg.generation.recipe, GenerationParams::new(0.7, 1024));
        assert_eq!(cfg.generation.meal_plan.max_output_tokens, 1500);
        assert!(cfg.timeout_secs.is_none());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "model = \"gemini-pro\"\nhistory_enabled = false\n\n[generation.nutrition]\ntemperature = 0.2\nmax_output_tokens = 300"
        )
        .unwrap();

        let cfg = Config::load(file.path()).unwrap();
        assert_eq!(cfg.model, "gemini-pro");
        assert!(!cfg.history_enabled);
        assert_eq!(cfg.generation.nutrition, GenerationParams::new(0.2, 300));
        assert_eq!(cfg.generation.recipe, GenerationParams::new(0.7, 1024));
        assert_eq!(cfg.api_key_env, "GEMINI_API_KEY");
    }

    #[test]
    fn yaml_config_is_accepted() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "provider: ollama\nmodel: llama3\ntimeout_secs: 30").unwrap();

        let cfg = Config::load(file.path()).unwrap();
        assert_eq!(cfg.provider, ProviderKind::Ollama);
        assert_eq!(cfg.timeout_secs, Some(30));
    }

    #[test]
    fn example_config_matches_defaults() {
        let cfg: Config = toml::from_str(include_str!("../../kitchen.example.toml")).unwrap();
        let defaults = Config::default();
        assert_eq!(cfg.model, defaults.model);
        assert_eq!(cfg.history_path, defaults.history_path);
        assert_eq!(cfg.generation.technique, defaults.generation.technique);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        assert!(Config::load(file.path()).is_err());
    }
}
