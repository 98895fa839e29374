//! FILENAME: tests/test_ingest.rs
//! Integration tests for dataset loading.

mod common;

use common::{SurveyFixture, TestHarness, SHOPPING_QUESTION};
use dashboard_lib::{
    load_configured_dataset, load_dataset, set_filter, DashboardConfig, NotificationVariant,
};

// ============================================================================
// SUCCESSFUL LOADS
// ============================================================================

#[test]
fn test_load_fixture_reports_counts() {
    let harness = TestHarness::new();
    let result = harness.load_csv("survey.csv", &SurveyFixture::csv());

    assert!(result.success);
    assert_eq!(result.record_count, SurveyFixture::record_count());
    assert_eq!(result.notification.title, "Dados carregados com sucesso!");
    assert_eq!(
        result.notification.description,
        format!("{} registros processados.", SurveyFixture::record_count())
    );
    assert_eq!(result.notification.variant, NotificationVariant::Default);

    let report = result.report.unwrap();
    assert_eq!(report.rows_read, SurveyFixture::data().len() + SurveyFixture::malformed().len());
    assert_eq!(report.dropped, SurveyFixture::malformed().len());
    assert_eq!(report.merged, 1);
}

#[test]
fn test_loaded_records_are_normalized() {
    let harness = TestHarness::with_survey_data();

    let tiktok = harness.find("Male", "Tiktok").unwrap();
    assert_eq!(tiktok.count, 15);
    assert_eq!(tiktok.question, SHOPPING_QUESTION);

    let none = harness.find("Female", "None").unwrap();
    assert!(none.is_none);

    assert!(harness.find("Male", "Facebook").is_none());
}

#[test]
fn test_percentages_recomputed_over_dataset() {
    let harness = TestHarness::with_survey_data();
    let records = harness.dataset();

    let total: u64 = records.iter().map(|r| r.count).sum();
    assert_eq!(total, SurveyFixture::total_count());

    let sum: f64 = records.iter().map(|r| r.percentage).sum();
    assert!((sum - 1.0).abs() < 1e-9);

    // Source column said 0.1 for every row
    let instagram = harness.find("Female", "Instagram").unwrap();
    assert!((instagram.percentage - 60.0 / total as f64).abs() < 1e-12);
}

#[test]
fn test_alternate_header_names() {
    let harness = TestHarness::new();
    let csv = "segmentType,segmentDescription,answer,count\nGender,Male,twitter,4\n";
    let result = harness.load_csv("camel.csv", csv);

    assert!(result.success);
    let record = harness.find("Male", "Twitter").unwrap();
    assert_eq!(record.count, 4);
    assert_eq!(record.question, "");
}

#[test]
fn test_load_empty_file_succeeds_with_no_records() {
    let harness = TestHarness::new();
    let result = harness.load_csv("empty.csv", "");
    assert!(result.success);
    assert_eq!(result.record_count, 0);
}

// ============================================================================
// FAILURES
// ============================================================================

#[test]
fn test_missing_file_notifies_and_empties_dataset() {
    let harness = TestHarness::with_survey_data();
    assert!(harness.record_count() > 0);

    let result = load_dataset(&harness.state, "/nonexistent/survey.csv");

    assert!(!result.success);
    assert!(result.error.is_some());
    assert_eq!(result.notification.title, "Erro ao carregar dados");
    assert_eq!(result.notification.variant, NotificationVariant::Destructive);
    assert_eq!(harness.record_count(), 0);
    assert!(!*harness.state.is_loading.lock().unwrap());
}

#[test]
fn test_unrecognized_headers_fail() {
    let harness = TestHarness::new();
    let result = harness.load_csv("other.csv", "Name,Age\nAlice,30\n");

    assert!(!result.success);
    assert_eq!(result.notification.variant, NotificationVariant::Destructive);
    assert_eq!(harness.record_count(), 0);
}

#[test]
fn test_unsupported_extension_fails() {
    let harness = TestHarness::new();
    let path = harness.write_file("survey.json", "{}");
    let result = load_dataset(&harness.state, &path.to_string_lossy());
    assert!(!result.success);
}

// ============================================================================
// STATE RESET
// ============================================================================

#[test]
fn test_reload_clears_filters_and_table() {
    let harness = TestHarness::with_survey_data();
    set_filter(&harness.state, "segmentType", "Gender");
    harness.state.table.lock().unwrap().page = 2;

    let result = harness.load_csv("again.csv", &SurveyFixture::csv());

    assert!(result.success);
    assert!(harness.state.filters.lock().unwrap().is_empty());
    assert_eq!(harness.state.table.lock().unwrap().page, 1);
    assert!(harness.state.source_path.lock().unwrap().is_some());
}

#[test]
fn test_load_configured_dataset() {
    let harness = TestHarness::new();
    let result = load_configured_dataset(&harness.state);
    assert!(!result.success);

    let path = harness.write_file("configured.csv", &SurveyFixture::csv());
    let mut config = DashboardConfig::default();
    config.data_path = Some(path);
    let configured = TestHarness::with_config(config);

    let result = load_configured_dataset(&configured.state);
    assert!(result.success);
    assert_eq!(result.record_count, SurveyFixture::record_count());
}
