//! FILENAME: app/dashboard/src/api_types.rs
// PURPOSE: Shared type definitions returned by dashboard commands.
// CONTEXT: All structs use camelCase serialization for JavaScript interoperability.

use insight_engine::{DashboardStats, PlatformTotal, SegmentData, SegmentTotal};
use persistence::ExportKind;
use serde::{Deserialize, Serialize};
use survey_engine::{CanonicalRecord, FilterState, NormalizeReport, SortState};

// ============================================================================
// NOTIFICATIONS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

/// Toast shown to the user after a long-running command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Notification {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Notification {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }
}

// ============================================================================
// COMMAND RESULTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadResult {
    pub success: bool,
    pub record_count: usize,
    pub report: Option<NormalizeReport>,
    pub notification: Notification,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterResult {
    pub success: bool,
    pub filters: FilterState,
    /// Records passing the active filters.
    pub filtered_count: usize,
    pub error: Option<String>,
}

/// One chart per configured segment type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentChart {
    pub segment_type: String,
    pub data: SegmentData,
    /// Highest-total segment descriptions, at most `topN`.
    pub top: Vec<SegmentTotal>,
}

/// Everything the dashboard cards and charts render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// Headline over the full dataset; empty when nothing is loaded.
    pub question: String,
    pub stats: DashboardStats,
    pub platform_totals: Vec<PlatformTotal>,
    pub segment_charts: Vec<SegmentChart>,
    pub filters: FilterState,
    pub total_records: usize,
    pub filtered_records: usize,
    pub is_loading: bool,
}

/// Current data table page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TablePage {
    pub rows: Vec<CanonicalRecord>,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// Rows after column search, before paging.
    pub total_rows: usize,
    pub sort: SortState,
    pub search: FilterState,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    pub success: bool,
    pub kind: ExportKind,
    pub path: Option<String>,
    pub record_count: usize,
    pub error: Option<String>,
}
