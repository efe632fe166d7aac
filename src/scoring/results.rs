//! Composition of scores and catalog content into result documents.
//!
//! The composer is pure and synchronous; it borrows a [`ReportCatalog`]
//! and never touches a store or cache. Paid documents carry catalog
//! narrative down to subcategory level; free documents carry category
//! scores with synthesized upsell content and no subcategory breakdown.

use crate::catalog::{ReportCatalog, color_for_score};
use crate::types::{
    Answer, Category, CategoryResult, PieChartData, ReportContent, ScoreResult, SubcategoryResult,
    Survey, SurveyResults,
};

use super::calculate_scores;

/// Builds renderable result documents for one survey.
pub struct ResultsComposer<'a> {
    catalog: &'a ReportCatalog,
}

impl<'a> ResultsComposer<'a> {
    pub fn new(catalog: &'a ReportCatalog) -> Self {
        Self { catalog }
    }

    /// Compose the complete result document for a session.
    pub fn compose(
        &self,
        session_id: &str,
        survey: &Survey,
        answers: &[Answer],
        paid: bool,
    ) -> SurveyResults {
        let scores = calculate_scores(answers, Some(survey));

        let categories = survey
            .structure
            .iter()
            .map(|category| {
                if paid {
                    self.paid_category(survey, category, &scores)
                } else {
                    free_category(category, scores.category_score(&category.id))
                }
            })
            .collect();

        let overall_content = self
            .catalog
            .find_content(survey.survey_type, "OVERALL", scores.overall_score, None)
            .cloned()
            .unwrap_or_else(|| fallback_content("Overall", scores.overall_score));

        SurveyResults {
            session_id: session_id.to_string(),
            survey_type: survey.survey_type,
            overall_score: scores.overall_score,
            overall_content,
            categories,
        }
    }

    /// Detailed results for one category looked up by name,
    /// case-insensitively. `None` when the survey has no such category.
    ///
    /// Category narrative always comes from the catalog (with fallback);
    /// the subcategory breakdown is included only for paid reports.
    pub fn category_details(
        &self,
        survey: &Survey,
        answers: &[Answer],
        category_name: &str,
        paid: bool,
    ) -> Option<CategoryResult> {
        let category = survey
            .structure
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(category_name))?;

        let scores = calculate_scores(answers, Some(survey));
        let mut result = self.paid_category(survey, category, &scores);
        if !paid {
            result.subcategories = None;
        }
        Some(result)
    }

    fn paid_category(
        &self,
        survey: &Survey,
        category: &Category,
        scores: &ScoreResult,
    ) -> CategoryResult {
        let score = scores.category_score(&category.id);
        let content = self
            .catalog
            .find_content(survey.survey_type, &category.name, score, None)
            .cloned()
            .unwrap_or_else(|| fallback_content(&category.name, score));

        let subcategories = category
            .subcategories
            .iter()
            .map(|sub| {
                let sub_score = scores.subcategory_score(&sub.id);
                let content = self
                    .catalog
                    .find_content(
                        survey.survey_type,
                        &category.name,
                        sub_score,
                        Some(&sub.name),
                    )
                    .cloned()
                    .unwrap_or_else(|| fallback_content(&sub.name, sub_score));
                SubcategoryResult {
                    name: sub.name.clone(),
                    score: sub_score,
                    content,
                }
            })
            .collect();

        CategoryResult {
            name: category.name.clone(),
            score,
            content,
            subcategories: Some(subcategories),
        }
    }
}

/// Per-category chart feed in structure order.
///
/// Values are the 0-100 category scores; a category absent from the
/// score maps charts as 0.
pub fn pie_chart(scores: &ScoreResult, survey: &Survey) -> PieChartData {
    let mut chart = PieChartData::default();
    for category in &survey.structure {
        let score = scores.category_score(&category.id);
        chart.labels.push(category.name.clone());
        chart.values.push(score);
        chart.colors.push(color_for_score(score).to_string());
    }
    chart
}

/// Category entry for free documents: score plus upsell copy, no
/// subcategories.
fn free_category(category: &Category, score: u8) -> CategoryResult {
    CategoryResult {
        name: category.name.clone(),
        score,
        content: upsell_content(&category.name, score),
        subcategories: None,
    }
}

fn upsell_content(name: &str, score: u8) -> ReportContent {
    ReportContent {
        category: name.to_uppercase(),
        subcategory: String::new(),
        title_summary: format!("{name}: {score}%"),
        result: format!("{score}%"),
        result_description: format!(
            "Your {} score is {score}%. Upgrade to paid version for detailed analysis.",
            name.to_lowercase()
        ),
        min: 0,
        max: 100,
        color: color_for_score(score).to_string(),
    }
}

/// Synthesized content for catalog misses; keeps composition total.
fn fallback_content(name: &str, score: u8) -> ReportContent {
    ReportContent {
        category: name.to_uppercase(),
        subcategory: String::new(),
        title_summary: format!("{name} Results"),
        result: format!("Score: {score}%"),
        result_description: format!("Your {} score is {score}%.", name.to_lowercase()),
        min: 0,
        max: 100,
        color: color_for_score(score).to_string(),
    }
}
