//! Score calculation for survey answers.
//!
//! Pure functions, no I/O. Raw answers are integers on a 1-10 scale and
//! every derived score is a 0-100 percentage computed as
//! `round(((avg - 1) / 9) * 100)`. Overall, category, and subcategory
//! scores are each derived from the raw answers independently, so
//! rounding never compounds across levels.

pub mod results;

use std::collections::BTreeMap;

use crate::types::{Answer, ScoreResult, Survey};

/// Lowest raw answer value a respondent can give.
pub const MIN_ANSWER: u8 = 1;
/// Highest raw answer value a respondent can give.
pub const MAX_ANSWER: u8 = 10;

/// Whether a raw answer value is on the 1-10 scale.
pub fn validate_score(score: u8) -> bool {
    (MIN_ANSWER..=MAX_ANSWER).contains(&score)
}

/// Whether every answer in the slice carries a valid score.
///
/// An empty slice is valid.
pub fn validate_answers(answers: &[Answer]) -> bool {
    answers.iter().all(|a| validate_score(a.score))
}

/// Map an average raw score onto the 0-100 percentage scale.
///
/// Rounds half away from zero (equivalent to half-up for the
/// non-negative averages produced by valid answers), then clamps so
/// out-of-range inputs can never escape the scale.
fn percentage(average: f64) -> u8 {
    let scaled = ((average - 1.0) / 9.0 * 100.0).round();
    scaled.clamp(0.0, 100.0) as u8
}

/// Percentage score over the answers selected by `in_scope`, or 0 when
/// none match.
fn score_where(answers: &[Answer], mut in_scope: impl FnMut(u32) -> bool) -> u8 {
    let mut sum = 0u32;
    let mut count = 0u32;
    for answer in answers {
        if in_scope(answer.question_id) {
            sum += u32::from(answer.score);
            count += 1;
        }
    }
    if count == 0 {
        0
    } else {
        percentage(f64::from(sum) / f64::from(count))
    }
}

/// Calculate overall, per-category, and per-subcategory scores.
///
/// With no answers the result is all zeroes with empty maps, whether or
/// not a structure was supplied. When a structure is supplied, every
/// category and subcategory id appears in the maps; ones with no
/// matching answers score 0. Answers whose question id appears nowhere
/// in the structure still count toward the overall score.
///
/// Callers are expected to run [`validate_answers`] first; this function
/// does not reject out-of-range scores, it only clamps their effect.
pub fn calculate_scores(answers: &[Answer], structure: Option<&Survey>) -> ScoreResult {
    if answers.is_empty() {
        return ScoreResult::default();
    }

    let total: u32 = answers.iter().map(|a| u32::from(a.score)).sum();
    let overall_score = percentage(f64::from(total) / answers.len() as f64);

    let mut category_scores = BTreeMap::new();
    let mut subcategory_scores = BTreeMap::new();

    if let Some(survey) = structure {
        for category in &survey.structure {
            category_scores.insert(
                category.id.clone(),
                score_where(answers, |id| category.contains_question(id)),
            );
            for subcategory in &category.subcategories {
                subcategory_scores.insert(
                    subcategory.id.clone(),
                    score_where(answers, |id| subcategory.contains_question(id)),
                );
            }
        }
    }

    ScoreResult {
        overall_score,
        category_scores,
        subcategory_scores,
        total_questions: structure.map_or(answers.len() as u32, Survey::total_questions),
        answered_questions: answers.len() as u32,
    }
}
