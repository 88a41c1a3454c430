//! Student records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Score;

/// A student and their per-course scores.
///
/// Identity fields are fixed at construction; only the score mapping changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    id: String,
    first_name: String,
    last_name: String,
    #[serde(default)]
    scores: HashMap<String, Score>,
}

impl Student {
    /// A student with no scores yet.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            scores: HashMap::new(),
        }
    }

    /// Student identifier, unique within a registry.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Store or overwrite the score for `course_code`.
    ///
    /// Fails with `InvalidArgument` outside `[0, 100]`, leaving any previous
    /// score in place.
    pub fn set_score(&mut self, course_code: &str, raw: f64) -> Result<Score> {
        let score = Score::new(raw)?;
        self.scores.insert(course_code.to_string(), score);
        Ok(score)
    }

    /// The score for `course_code`, or `None` if the student is unscored there.
    pub fn score(&self, course_code: &str) -> Option<Score> {
        self.scores.get(course_code).copied()
    }

    /// Whether a score is recorded for `course_code`.
    pub fn has_score(&self, course_code: &str) -> bool {
        self.scores.contains_key(course_code)
    }

    /// All recorded scores keyed by course code. Iteration order is unspecified.
    pub fn scores(&self) -> &HashMap<String, Score> {
        &self.scores
    }
}
