//! Survey structure and answer types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Survey flavour: the short express assessment or the full one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurveyType {
    Express,
    Full,
}

impl SurveyType {
    /// Lowercase name as used in documents and report-catalog tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            SurveyType::Express => "express",
            SurveyType::Full => "full",
        }
    }
}

impl fmt::Display for SurveyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single question within a subcategory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
}

impl Question {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// A subcategory grouping questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: String,
    pub name: String,
    pub questions: Vec<Question>,
}

impl Subcategory {
    /// Whether the given question belongs to this subcategory.
    pub fn contains_question(&self, question_id: u32) -> bool {
        self.questions.iter().any(|q| q.id == question_id)
    }
}

/// A top-level category grouping subcategories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub subcategories: Vec<Subcategory>,
}

impl Category {
    /// Whether the given question belongs to any of this category's
    /// subcategories.
    pub fn contains_question(&self, question_id: u32) -> bool {
        self.subcategories
            .iter()
            .any(|s| s.contains_question(question_id))
    }

    /// Number of questions across all subcategories.
    pub fn question_count(&self) -> u32 {
        self.subcategories
            .iter()
            .map(|s| s.questions.len() as u32)
            .sum()
    }
}

/// The full structure of a survey.
///
/// Question ids are unique across the whole structure; a question belongs
/// to exactly one subcategory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Survey {
    pub id: u32,
    #[serde(rename = "type")]
    pub survey_type: SurveyType,
    pub name: String,
    pub structure: Vec<Category>,
}

impl Survey {
    /// Total number of questions across all categories.
    pub fn total_questions(&self) -> u32 {
        self.structure.iter().map(Category::question_count).sum()
    }
}

/// A raw 1-10 answer to one question.
///
/// Immutable once validated; one answer per (session, question), last
/// write wins at the store level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: u32,
    pub score: u8,
}

impl Answer {
    pub fn new(question_id: u32, score: u8) -> Self {
        Self { question_id, score }
    }
}
