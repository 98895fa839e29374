//! FILENAME: tests/test_filters.rs
//! Integration tests for dashboard filter commands.

mod common;

use common::TestHarness;
use dashboard_lib::{clear_filters, get_filter_options, get_filters, set_filter};

#[test]
fn test_filter_by_segment_type() {
    let harness = TestHarness::with_survey_data();
    let result = set_filter(&harness.state, "segmentType", "Gender");

    assert!(result.success);
    assert_eq!(result.filters.segment_type, "Gender");
    // Male Twitter, Male Tiktok, Female Instagram, Female None
    assert_eq!(result.filtered_count, 4);
}

#[test]
fn test_filters_combine() {
    let harness = TestHarness::with_survey_data();
    set_filter(&harness.state, "segmentType", "Gender");
    set_filter(&harness.state, "segmentDescription", "Male");
    let result = set_filter(&harness.state, "answer", "Tiktok");

    assert!(result.success);
    assert_eq!(result.filtered_count, 1);
}

#[test]
fn test_filter_is_case_sensitive() {
    let harness = TestHarness::with_survey_data();
    let result = set_filter(&harness.state, "segmentType", "gender");
    assert!(result.success);
    assert_eq!(result.filtered_count, 0);
}

#[test]
fn test_changing_segment_type_clears_description() {
    let harness = TestHarness::with_survey_data();
    set_filter(&harness.state, "segmentType", "Gender");
    set_filter(&harness.state, "segmentDescription", "Male");

    let result = set_filter(&harness.state, "segmentType", "University");

    assert_eq!(result.filters.segment_description, "");
    // Stanford x2, MIT, Harvard
    assert_eq!(result.filtered_count, 4);
}

#[test]
fn test_all_option_removes_constraint() {
    let harness = TestHarness::with_survey_data();
    set_filter(&harness.state, "answer", "Instagram");
    let result = set_filter(&harness.state, "answer", "all");

    assert!(result.success);
    assert!(result.filters.is_empty());
    assert_eq!(result.filtered_count, harness.record_count());
}

#[test]
fn test_unknown_or_numeric_field_rejected() {
    let harness = TestHarness::with_survey_data();

    let result = set_filter(&harness.state, "platform", "Twitter");
    assert!(!result.success);
    assert!(result.error.unwrap().contains("platform"));

    let result = set_filter(&harness.state, "count", "5");
    assert!(!result.success);
    assert!(get_filters(&harness.state).unwrap().is_empty());
}

#[test]
fn test_clear_filters() {
    let harness = TestHarness::with_survey_data();
    set_filter(&harness.state, "segmentType", "Gender");
    set_filter(&harness.state, "answer", "Twitter");

    let result = clear_filters(&harness.state);

    assert!(result.success);
    assert!(result.filters.is_empty());
    assert_eq!(result.filtered_count, harness.record_count());
}

#[test]
fn test_filter_change_resets_table_page() {
    let harness = TestHarness::with_survey_data();
    harness.state.table.lock().unwrap().page = 2;

    set_filter(&harness.state, "segmentType", "Mobile");

    assert_eq!(harness.state.table.lock().unwrap().page, 1);
}

// ============================================================================
// FILTER OPTIONS
// ============================================================================

#[test]
fn test_filter_options() {
    let harness = TestHarness::with_survey_data();

    let options = get_filter_options(&harness.state).unwrap();
    assert_eq!(options.segment_types, vec!["Gender", "Mobile", "University"]);
    assert!(options.segment_descriptions.is_empty());
    assert_eq!(
        options.answers,
        vec!["Facebook", "Instagram", "None", "Snapchat", "Tiktok", "Twitter"]
    );

    set_filter(&harness.state, "segmentType", "University");
    let options = get_filter_options(&harness.state).unwrap();
    assert_eq!(options.segment_descriptions, vec!["Harvard", "MIT", "Stanford"]);
}

#[test]
fn test_filter_options_without_data() {
    let harness = TestHarness::new();
    let options = get_filter_options(&harness.state).unwrap();
    assert!(options.segment_types.is_empty());
    assert!(options.answers.is_empty());
}
