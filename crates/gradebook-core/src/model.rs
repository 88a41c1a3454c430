//! Value types shared by the records and the registry.
//!
//! A [`Score`] is the only numeric input the system accepts; the remaining
//! types are the derived outcomes reported back to callers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{GradingError, Result};

/// Lowest accepted score.
pub const MIN_SCORE: f64 = 0.0;
/// Highest accepted score.
pub const MAX_SCORE: f64 = 100.0;

/// A numeric course result, guaranteed to lie in `[0, 100]`.
///
/// "No score" is modelled as `Option<Score>`, so every constructed value is
/// a real result.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Score(f64);

impl Score {
    /// Validate and wrap a raw score. Both bounds are inclusive; NaN is rejected.
    pub fn new(value: f64) -> Result<Self> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
            return Err(GradingError::InvalidArgument(format!(
                "score must be between {MIN_SCORE} and {MAX_SCORE}, got {value}"
            )));
        }
        Ok(Score(value))
    }

    /// The raw numeric value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Score {
    type Error = GradingError;

    fn try_from(value: f64) -> Result<Self> {
        Score::new(value)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Letter grade derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LetterGrade::A => write!(f, "A"),
            LetterGrade::B => write!(f, "B"),
            LetterGrade::C => write!(f, "C"),
            LetterGrade::D => write!(f, "D"),
            LetterGrade::F => write!(f, "F"),
        }
    }
}

impl FromStr for LetterGrade {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(LetterGrade::A),
            "B" => Ok(LetterGrade::B),
            "C" => Ok(LetterGrade::C),
            "D" => Ok(LetterGrade::D),
            "F" => Ok(LetterGrade::F),
            other => Err(format!("unknown letter grade: {other}")),
        }
    }
}

/// Performance bucket for one student in one course.
///
/// `NoGrade` and `Invalid` are reported instead of errors: the former when the
/// student has no score for the course, the latter when either id is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerformanceCategory {
    Excellent,
    Satisfactory,
    Pass,
    Fail,
    #[serde(rename = "No Grade")]
    NoGrade,
    Invalid,
}

impl fmt::Display for PerformanceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerformanceCategory::Excellent => write!(f, "Excellent"),
            PerformanceCategory::Satisfactory => write!(f, "Satisfactory"),
            PerformanceCategory::Pass => write!(f, "Pass"),
            PerformanceCategory::Fail => write!(f, "Fail"),
            PerformanceCategory::NoGrade => write!(f, "No Grade"),
            PerformanceCategory::Invalid => write!(f, "Invalid"),
        }
    }
}

impl FromStr for PerformanceCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "excellent" => Ok(PerformanceCategory::Excellent),
            "satisfactory" => Ok(PerformanceCategory::Satisfactory),
            "pass" => Ok(PerformanceCategory::Pass),
            "fail" => Ok(PerformanceCategory::Fail),
            "no grade" => Ok(PerformanceCategory::NoGrade),
            "invalid" => Ok(PerformanceCategory::Invalid),
            other => Err(format!("unknown performance category: {other}")),
        }
    }
}

/// Outcome of an exam-eligibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExamEligibility {
    Eligible,
    #[serde(rename = "Not Eligible")]
    NotEligible,
    Conditional,
}

impl fmt::Display for ExamEligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExamEligibility::Eligible => write!(f, "Eligible"),
            ExamEligibility::NotEligible => write!(f, "Not Eligible"),
            ExamEligibility::Conditional => write!(f, "Conditional"),
        }
    }
}

impl FromStr for ExamEligibility {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "eligible" => Ok(ExamEligibility::Eligible),
            "not eligible" => Ok(ExamEligibility::NotEligible),
            "conditional" => Ok(ExamEligibility::Conditional),
            other => Err(format!("unknown exam eligibility: {other}")),
        }
    }
}
