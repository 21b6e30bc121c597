//! Search and export types for the insights dashboard.

use serde::{Deserialize, Serialize};

/// Body for `POST /insights/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// One surfaced insight (pain point or trending idea).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightItem {
    pub id: String,
    pub platform: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_score: Option<i64>,
    pub source: String,
}

/// A generated content idea with suggested platforms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentIdea {
    pub id: String,
    pub title: String,
    pub description: String,
    pub platforms: Vec<String>,
}

/// Full result of one search, grouped by category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub pain_points: Vec<InsightItem>,
    pub trending_ideas: Vec<InsightItem>,
    pub content_ideas: Vec<ContentIdea>,
}

/// Body for `POST /insights/export`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub search_id: String,
    /// "CSV" or "PDF"; the API owns validation.
    pub format: String,
}

/// Response to an export request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub download_url: String,
    pub success: bool,
}
