//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for DataPulse dashboard integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use dashboard_lib::{create_app_state, load_dataset, AppState, DashboardConfig, LoadResult};
use survey_engine::CanonicalRecord;
use tempfile::TempDir;

/// Test harness owning an AppState and a scratch directory.
pub struct TestHarness {
    pub state: AppState,
    pub dir: TempDir,
}

impl TestHarness {
    /// Create a harness with default configuration and no dataset.
    /// Exports default to the scratch directory.
    pub fn new() -> Self {
        Self::with_config(DashboardConfig::default())
    }

    pub fn with_config(mut config: DashboardConfig) -> Self {
        let dir = tempfile::tempdir().unwrap();
        config.export_dir = dir.path().to_path_buf();
        TestHarness {
            state: create_app_state(config),
            dir,
        }
    }

    /// Create a harness with the survey fixture loaded.
    pub fn with_survey_data() -> Self {
        let harness = Self::new();
        let result = harness.load_csv("survey.csv", &SurveyFixture::csv());
        assert!(result.success, "fixture load failed: {:?}", result.error);
        harness
    }

    // ========================================================================
    // HELPER METHODS
    // ========================================================================

    /// Write `content` to the scratch directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn load_csv(&self, name: &str, content: &str) -> LoadResult {
        let path = self.write_file(name, content);
        load_dataset(&self.state, &path.to_string_lossy())
    }

    pub fn dataset(&self) -> Vec<CanonicalRecord> {
        self.state.dataset.lock().unwrap().clone()
    }

    pub fn record_count(&self) -> usize {
        self.state.dataset.lock().unwrap().len()
    }

    pub fn find(&self, segment_description: &str, answer: &str) -> Option<CanonicalRecord> {
        self.dataset()
            .into_iter()
            .find(|r| r.segment_description == segment_description && r.answer == answer)
    }

    pub fn export_dir(&self) -> String {
        self.dir.path().to_string_lossy().to_string()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TEST DATA FIXTURES
// ============================================================================

pub const SHOPPING_QUESTION: &str = "What social platform has influenced your online shopping most?";
pub const SHOPPING_LABEL: &str = "Qual plataforma social mais influenciou suas compras online?";

/// Survey export in the "Question, Segment Type, Segment Description, Answer,
/// Count, Percentage" layout.
pub struct SurveyFixture;

impl SurveyFixture {
    pub fn headers() -> Vec<&'static str> {
        vec!["Question", "Segment Type", "Segment Description", "Answer", "Count", "Percentage"]
    }

    /// Valid rows. "tiktok"/"TikTok" for Male merge into one record.
    pub fn data() -> Vec<(&'static str, &'static str, &'static str, &'static str)> {
        vec![
            ("Gender", "Male", "Twitter", "40"),
            ("Gender", "Male", "tiktok", "10"),
            ("Gender", "Male", "TikTok", "5"),
            ("Gender", "Female", "Instagram", "60"),
            ("Gender", "Female", "None", "20"),
            ("University", "Stanford", "Twitter", "12"),
            ("University", "Stanford", "Facebook", "3"),
            ("University", "MIT", "Snapchat", "8"),
            ("University", "Harvard", "Instagram", "25"),
            ("Mobile", "iOS", "Instagram", "30"),
            ("Mobile", "Android", "Facebook", "7"),
            ("Mobile", "Android", "Twitter", "9"),
        ]
    }

    /// Rows the normalizer must drop.
    pub fn malformed() -> Vec<(&'static str, &'static str, &'static str, &'static str)> {
        vec![
            ("Gender", "Male", "Facebook", "0"),
            ("Gender", "Male", "Facebook", "-3"),
            ("Gender", "Male", "Facebook", "abc"),
            ("Gender", "Male", "   ", "5"),
        ]
    }

    /// Records after normalization (tiktok rows merged).
    pub fn record_count() -> usize {
        Self::data().len() - 1
    }

    pub fn total_count() -> u64 {
        Self::data().iter().map(|(_, _, _, c)| c.parse::<u64>().unwrap()).sum()
    }

    pub fn csv() -> String {
        let mut out = Self::headers().join(",");
        out.push('\n');
        for (segment_type, description, answer, count) in Self::data().into_iter().chain(Self::malformed()) {
            out.push_str(&format!(
                "\"{}\",{},{},{},{},0.1\n",
                SHOPPING_QUESTION, segment_type, description, answer, count
            ));
        }
        out
    }
}
