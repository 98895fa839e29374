//! FILENAME: app/dashboard/src/config.rs
// PURPOSE: Dashboard settings, loaded from a JSON file.
// CONTEXT: Every field has a default so a partial file (or none at all) works.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use survey_engine::ColumnMapping;

use crate::error::ConfigError;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfig {
    /// Survey export loaded by `load_configured_dataset`.
    pub data_path: Option<PathBuf>,
    /// Unified log file; console only when unset.
    pub log_path: Option<PathBuf>,
    /// Rows per data table page.
    pub page_size: usize,
    /// Entries in each "top segments" ranking.
    pub top_n: usize,
    /// Segment types charted on the dashboard, in display order.
    pub chart_segments: Vec<String>,
    pub columns: ColumnMapping,
    /// Extra question text -> label entries on top of the built-in table.
    pub question_translations: BTreeMap<String, String>,
    /// Directory exports are written to when the caller gives none.
    pub export_dir: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            data_path: None,
            log_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            top_n: insight_engine::DEFAULT_TOP_N,
            chart_segments: vec!["Gender".to_string(), "University".to_string()],
            columns: ColumnMapping::default(),
            question_translations: BTreeMap::new(),
            export_dir: PathBuf::from("."),
        }
    }
}

impl DashboardConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("pageSize must be at least 1".to_string()));
        }
        if self.top_n == 0 {
            return Err(ConfigError::Invalid("topN must be at least 1".to_string()));
        }
        Ok(())
    }
}
