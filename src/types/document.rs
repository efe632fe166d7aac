//! Result document model handed to renderers

use serde::{Deserialize, Serialize};

use super::survey::SurveyType;

/// One content band from the report catalog, or a synthesized fallback.
///
/// `min`/`max` delimit the inclusive score band the text applies to;
/// `color` is a `#rgb` or `#rrggbb` hex value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportContent {
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    pub title_summary: String,
    pub result: String,
    pub result_description: String,
    pub min: u8,
    pub max: u8,
    pub color: String,
}

/// A scored subcategory with its narrative content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubcategoryResult {
    pub name: String,
    pub score: u8,
    pub content: ReportContent,
}

/// A scored category with its narrative content.
///
/// `subcategories` is `Some` in paid documents and `None` in free ones —
/// one type covers both shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub name: String,
    pub score: u8,
    pub content: ReportContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategories: Option<Vec<SubcategoryResult>>,
}

/// The complete result document for one session, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResults {
    pub session_id: String,
    pub survey_type: SurveyType,
    pub overall_score: u8,
    pub overall_content: ReportContent,
    pub categories: Vec<CategoryResult>,
}

/// Per-category chart feed for renderers.
///
/// Parallel vectors in structure order. `values` are the 0-100 category
/// scores — they already are the percentages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieChartData {
    pub labels: Vec<String>,
    pub values: Vec<u8>,
    pub colors: Vec<String>,
}
