use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use fs_err as fs;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use uuid::Uuid;

/// Which tool produced a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HistoryModule {
    Chatbot,
    RecipeGenerator,
    CalorieTracker,
    MealPlanner,
}

impl HistoryModule {
    pub fn tag(self) -> &'static str {
        match self {
            HistoryModule::Chatbot => "chatbot",
            HistoryModule::RecipeGenerator => "recipeGenerator",
            HistoryModule::CalorieTracker => "calorieTracker",
            HistoryModule::MealPlanner => "mealPlanner",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub entry: String,
}

/// Module tag -> entries in the order they were appended.
pub type HistoryDocument = BTreeMap<String, Vec<HistoryEntry>>;

/// Append-only history stored as a single JSON document.
pub struct HistoryLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl HistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), write_lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, module: HistoryModule, entry: &str) -> Result<HistoryEntry> {
        let _guard = self.write_lock.lock();

        let mut doc = self.read_all()?;
        let record = HistoryEntry {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            entry: entry.to_string(),
        };
        doc.entry(module.tag().to_string()).or_default().push(record.clone());

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;
        let tmp = NamedTempFile::new_in(dir)?;
        fs::write(tmp.path(), serde_json::to_string_pretty(&doc)?)?;
        tmp.persist(&self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;

        Ok(record)
    }

    /// Whole document; a missing file reads as empty.
    pub fn read_all(&self) -> Result<HistoryDocument> {
        if !self.path.exists() {
            return Ok(HistoryDocument::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(HistoryDocument::new());
        }
        serde_json::from_str(&raw)
            .with_context(|| format!("corrupt history file {}", self.path.display()))
    }
}
