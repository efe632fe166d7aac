//! Score rollup results

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Normalized 0-100 scores at all three aggregation levels.
///
/// Maps are keyed by category/subcategory id. When a structure is supplied
/// with a non-empty answer set, every structural id is present — ids with
/// no matching answers score 0, they are never omitted. An empty answer
/// set yields empty maps.
///
/// Deterministic: identical inputs produce an identical result, including
/// serialized form (ordered maps).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub overall_score: u8,
    pub category_scores: BTreeMap<String, u8>,
    pub subcategory_scores: BTreeMap<String, u8>,
    pub total_questions: u32,
    pub answered_questions: u32,
}

impl ScoreResult {
    /// Score for a category id; 0 when the id is unknown.
    pub fn category_score(&self, id: &str) -> u8 {
        self.category_scores.get(id).copied().unwrap_or(0)
    }

    /// Score for a subcategory id; 0 when the id is unknown.
    pub fn subcategory_score(&self, id: &str) -> u8 {
        self.subcategory_scores.get(id).copied().unwrap_or(0)
    }
}
