//! Report content catalog loaded from CSV tables.
//!
//! One table of narrative rows per survey flavour, parsed with the
//! `csv` crate. Cells are sanitized at load time (leading spreadsheet
//! formula characters and control characters stripped, colors
//! validated) so lookups hand text straight to renderers. An empty
//! catalog is valid; callers fall back to synthesized content on every
//! miss.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::types::{ReportContent, SurveyType};

/// Fallback for cells that do not pass color validation.
const FALLBACK_COLOR: &str = "#000000";

/// Score-band colors, lowest band first.
const BAND_COLORS: [(u8, &str); 5] = [
    (20, "#eb2f06"),
    (35, "#f6b93b"),
    (49, "#fad390"),
    (74, "#b8e994"),
    (89, "#78e08f"),
];

/// Band color for a 0-100 score.
pub fn color_for_score(score: u8) -> &'static str {
    for (upper, color) in BAND_COLORS {
        if score <= upper {
            return color;
        }
    }
    "#6ab04c"
}

/// Raw CSV row; all fields read as text so one malformed number cell
/// degrades to a default instead of failing the whole load.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default)]
    category: String,
    #[serde(default)]
    subcategory: String,
    #[serde(default)]
    title_summary: String,
    #[serde(default)]
    result: String,
    #[serde(default)]
    result_description: String,
    #[serde(default)]
    min: String,
    #[serde(default)]
    max: String,
    #[serde(default)]
    color: String,
}

impl RawRow {
    fn into_content(self) -> ReportContent {
        ReportContent {
            category: sanitize_cell(&self.category),
            subcategory: sanitize_cell(&self.subcategory),
            title_summary: sanitize_cell(&self.title_summary),
            result: sanitize_cell(&self.result),
            result_description: sanitize_cell(&self.result_description),
            min: self.min.trim().parse().unwrap_or(0),
            max: self.max.trim().parse().unwrap_or(100),
            color: sanitize_color(&self.color),
        }
    }
}

/// Narrative content tables for report generation.
#[derive(Debug, Clone, Default)]
pub struct ReportCatalog {
    express: Vec<ReportContent>,
    full: Vec<ReportContent>,
}

impl ReportCatalog {
    /// A catalog with no content; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse both tables from CSV text.
    ///
    /// Expected headers: `category, subcategory, title_summary, result,
    /// result_description, min, max, color`. Cells are trimmed.
    pub fn from_csv(express: &str, full: &str) -> Result<Self> {
        let catalog = Self {
            express: parse_table(express)?,
            full: parse_table(full)?,
        };
        info!(
            express_entries = catalog.express.len(),
            full_entries = catalog.full.len(),
            "loaded report catalog"
        );
        Ok(catalog)
    }

    /// Load both tables from CSV files.
    pub fn from_files(express_path: &Path, full_path: &Path) -> Result<Self> {
        let express = std::fs::read_to_string(express_path)?;
        let full = std::fs::read_to_string(full_path)?;
        Self::from_csv(&express, &full)
    }

    /// Find the content row for a category (and optional subcategory)
    /// whose `min..=max` band contains the score.
    ///
    /// Category and subcategory names match case-insensitively; `None`
    /// subcategory matches rows with an empty subcategory cell. The
    /// first matching row wins.
    pub fn find_content(
        &self,
        survey_type: SurveyType,
        category: &str,
        score: u8,
        subcategory: Option<&str>,
    ) -> Option<&ReportContent> {
        let wanted_sub = subcategory.unwrap_or("");
        let found = self.table(survey_type).iter().find(|entry| {
            entry.category.eq_ignore_ascii_case(category)
                && entry.subcategory.eq_ignore_ascii_case(wanted_sub)
                && entry.min <= score
                && score <= entry.max
        });
        if found.is_none() {
            debug!(
                survey_type = %survey_type,
                category,
                subcategory = wanted_sub,
                score,
                "no catalog content matched"
            );
        }
        found
    }

    /// Number of rows loaded for a survey flavour.
    pub fn entry_count(&self, survey_type: SurveyType) -> usize {
        self.table(survey_type).len()
    }

    fn table(&self, survey_type: SurveyType) -> &[ReportContent] {
        match survey_type {
            SurveyType::Express => &self.express,
            SurveyType::Full => &self.full,
        }
    }
}

fn parse_table(text: &str) -> Result<Vec<ReportContent>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for row in reader.deserialize::<RawRow>() {
        rows.push(row?.into_content());
    }
    Ok(rows)
}

/// Strip one leading spreadsheet formula character and all ASCII
/// control characters.
fn sanitize_cell(value: &str) -> String {
    value
        .strip_prefix(['=', '+', '-', '@'])
        .unwrap_or(value)
        .chars()
        .filter(|c| !c.is_ascii_control())
        .collect()
}

/// Keep `#rgb` / `#rrggbb` hex colors, replace anything else.
fn sanitize_color(value: &str) -> String {
    if is_hex_color(value) {
        value.to_string()
    } else {
        FALLBACK_COLOR.to_string()
    }
}

fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_bands_at_boundaries() {
        assert_eq!(color_for_score(0), "#eb2f06");
        assert_eq!(color_for_score(20), "#eb2f06");
        assert_eq!(color_for_score(21), "#f6b93b");
        assert_eq!(color_for_score(35), "#f6b93b");
        assert_eq!(color_for_score(36), "#fad390");
        assert_eq!(color_for_score(49), "#fad390");
        assert_eq!(color_for_score(50), "#b8e994");
        assert_eq!(color_for_score(74), "#b8e994");
        assert_eq!(color_for_score(75), "#78e08f");
        assert_eq!(color_for_score(89), "#78e08f");
        assert_eq!(color_for_score(90), "#6ab04c");
        assert_eq!(color_for_score(100), "#6ab04c");
    }

    #[test]
    fn sanitize_cell_strips_formula_prefix() {
        assert_eq!(sanitize_cell("=SUM(A1)"), "SUM(A1)");
        assert_eq!(sanitize_cell("+positive"), "positive");
        assert_eq!(sanitize_cell("-negative"), "negative");
        assert_eq!(sanitize_cell("@mention"), "mention");
        // only the first character is a formula marker
        assert_eq!(sanitize_cell("==twice"), "=twice");
        assert_eq!(sanitize_cell("plain text"), "plain text");
    }

    #[test]
    fn sanitize_cell_removes_control_characters() {
        assert_eq!(sanitize_cell("a\x00b\x1fc\x7fd"), "abcd");
        assert_eq!(sanitize_cell("keeps spaces intact"), "keeps spaces intact");
    }

    #[test]
    fn sanitize_color_accepts_hex_forms() {
        assert_eq!(sanitize_color("#eb2f06"), "#eb2f06");
        assert_eq!(sanitize_color("#ABC"), "#ABC");
        assert_eq!(sanitize_color("red"), "#000000");
        assert_eq!(sanitize_color("#12345"), "#000000");
        assert_eq!(sanitize_color("#gggggg"), "#000000");
        assert_eq!(sanitize_color(""), "#000000");
    }

    #[test]
    fn empty_catalog_misses_everything() {
        let catalog = ReportCatalog::empty();
        assert!(
            catalog
                .find_content(SurveyType::Full, "PRODUCT", 50, None)
                .is_none()
        );
        assert_eq!(catalog.entry_count(SurveyType::Express), 0);
    }

    const TABLE: &str = "\
category,subcategory,title_summary,result,result_description,min,max,color
OVERALL,,Overall results,Low,You scored low.,0,49,#eb2f06
OVERALL,,Overall results,High,You scored high.,50,100,#6ab04c
PRODUCT,,Product,Mid,Product is mid.,0,100,#b8e994
PRODUCT,Product Line,Line,Fine,Line is fine.,0,100,#78e08f
";

    fn catalog() -> ReportCatalog {
        ReportCatalog::from_csv(TABLE, TABLE).unwrap()
    }

    #[test]
    fn find_content_picks_matching_band() {
        let catalog = catalog();
        let low = catalog
            .find_content(SurveyType::Full, "OVERALL", 49, None)
            .unwrap();
        assert_eq!(low.result, "Low");
        let high = catalog
            .find_content(SurveyType::Full, "OVERALL", 50, None)
            .unwrap();
        assert_eq!(high.result, "High");
    }

    #[test]
    fn find_content_is_case_insensitive() {
        let catalog = catalog();
        assert!(
            catalog
                .find_content(SurveyType::Full, "overall", 10, None)
                .is_some()
        );
        assert!(
            catalog
                .find_content(SurveyType::Full, "Product", 10, Some("PRODUCT LINE"))
                .is_some()
        );
    }

    #[test]
    fn find_content_without_subcategory_skips_subcategory_rows() {
        let catalog = catalog();
        let entry = catalog
            .find_content(SurveyType::Full, "PRODUCT", 10, None)
            .unwrap();
        assert_eq!(entry.result, "Mid");
    }

    #[test]
    fn lenient_numeric_cells_fall_back() {
        let table = "\
category,subcategory,title_summary,result,result_description,min,max,color
OVERALL,,T,R,D,abc,xyz,#fff
";
        let catalog = ReportCatalog::from_csv(table, "").unwrap();
        let entry = catalog
            .find_content(SurveyType::Express, "OVERALL", 100, None)
            .unwrap();
        assert_eq!(entry.min, 0);
        assert_eq!(entry.max, 100);
        assert_eq!(entry.color, "#fff");
    }
}
