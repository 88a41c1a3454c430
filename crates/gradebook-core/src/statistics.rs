//! Course-level aggregate statistics.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::course::Course;
use crate::model::{LetterGrade, Score};
use crate::policy::GradingPolicy;
use crate::student::Student;

/// Arithmetic mean of `scores`, or `0.0` when there are none.
pub fn mean<I>(scores: I) -> f64
where
    I: IntoIterator<Item = Score>,
{
    let (total, count) = scores
        .into_iter()
        .fold((0.0f64, 0usize), |(total, count), s| (total + s.value(), count + 1));
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

/// Snapshot of one course's results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub course_code: String,
    pub course_name: String,
    /// Number of enrolled students.
    pub enrolled: usize,
    /// Enrolled students with a score for this course.
    pub scored: usize,
    /// Mean over the scored students; `0.0` if none.
    pub average: f64,
    pub highest: Option<f64>,
    pub lowest: Option<f64>,
    /// Letter grades of the scored students.
    pub letter_distribution: BTreeMap<LetterGrade, usize>,
}

impl CourseSummary {
    /// Summarize `course` over its resolved roster.
    pub fn compute<'a, I>(course: &Course, roster: I, policy: &GradingPolicy) -> Self
    where
        I: IntoIterator<Item = &'a Student>,
    {
        let scores: Vec<Score> = roster
            .into_iter()
            .filter_map(|s| s.score(course.code()))
            .collect();

        let mut letter_distribution = BTreeMap::new();
        for &score in &scores {
            *letter_distribution
                .entry(policy.letter_for(score))
                .or_insert(0) += 1;
        }

        let values = scores.iter().map(|s| s.value());
        Self {
            course_code: course.code().to_string(),
            course_name: course.name().to_string(),
            enrolled: course.len(),
            scored: scores.len(),
            average: mean(scores.iter().copied()),
            highest: values.clone().reduce(f64::max),
            lowest: values.reduce(f64::min),
            letter_distribution,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize course summary")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(raw: &[f64]) -> Vec<Score> {
        raw.iter().map(|&r| Score::new(r).unwrap()).collect()
    }

    #[test]
    fn mean_of_nothing_is_zero() {
        assert_eq!(mean(Vec::<Score>::new()), 0.0);
    }

    #[test]
    fn mean_of_scores() {
        assert!((mean(scores(&[90.0, 70.0])) - 80.0).abs() < f64::EPSILON);
        assert!((mean(scores(&[100.0])) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn summary_skips_unscored_students() {
        let mut course = Course::new("CS101", "Intro");
        let mut a = Student::new("1", "Ada", "Lovelace");
        let mut b = Student::new("2", "Grace", "Hopper");
        let c = Student::new("3", "Alan", "Turing");
        a.set_score("CS101", 90.0).unwrap();
        b.set_score("CS101", 70.0).unwrap();
        for s in [&a, &b, &c] {
            course.enroll(s);
        }

        let summary = CourseSummary::compute(&course, [&a, &b, &c], &GradingPolicy::default());
        assert_eq!(summary.enrolled, 3);
        assert_eq!(summary.scored, 2);
        assert!((summary.average - 80.0).abs() < f64::EPSILON);
        assert_eq!(summary.highest, Some(90.0));
        assert_eq!(summary.lowest, Some(70.0));
        assert_eq!(summary.letter_distribution.get(&LetterGrade::A), Some(&1));
        assert_eq!(summary.letter_distribution.get(&LetterGrade::C), Some(&1));
        assert_eq!(summary.letter_distribution.get(&LetterGrade::B), None);
    }

    #[test]
    fn empty_summary_serializes() {
        let course = Course::new("EMPTY", "Nobody");
        let summary =
            CourseSummary::compute(&course, Vec::<&Student>::new(), &GradingPolicy::default());
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.highest, None);

        let json = summary.to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["course_code"], "EMPTY");
        assert_eq!(value["scored"], 0);
    }
}
