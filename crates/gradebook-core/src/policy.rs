//! Grading policy: the score thresholds behind letter grades and
//! performance categories, plus loading it from TOML.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::{self, GradingError};
use crate::model::{LetterGrade, PerformanceCategory, Score, MAX_SCORE, MIN_SCORE};

/// Environment variable naming an explicit policy file.
pub const POLICY_ENV_VAR: &str = "GRADEBOOK_POLICY";

/// Lower bounds (inclusive) for letter grades. Anything below `d` is an F.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterThresholds {
    #[serde(default = "default_a")]
    pub a: f64,
    #[serde(default = "default_b")]
    pub b: f64,
    #[serde(default = "default_c")]
    pub c: f64,
    #[serde(default = "default_d")]
    pub d: f64,
}

fn default_a() -> f64 {
    90.0
}
fn default_b() -> f64 {
    80.0
}
fn default_c() -> f64 {
    70.0
}
fn default_d() -> f64 {
    60.0
}

impl Default for LetterThresholds {
    fn default() -> Self {
        Self {
            a: default_a(),
            b: default_b(),
            c: default_c(),
            d: default_d(),
        }
    }
}

/// Lower bounds (inclusive) for performance categories. Below `pass` is a fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceThresholds {
    #[serde(default = "default_excellent")]
    pub excellent: f64,
    #[serde(default = "default_satisfactory")]
    pub satisfactory: f64,
    #[serde(default = "default_pass")]
    pub pass: f64,
}

fn default_excellent() -> f64 {
    85.0
}
fn default_satisfactory() -> f64 {
    70.0
}
fn default_pass() -> f64 {
    50.0
}

impl Default for PerformanceThresholds {
    fn default() -> Self {
        Self {
            excellent: default_excellent(),
            satisfactory: default_satisfactory(),
            pass: default_pass(),
        }
    }
}

/// Thresholds used by a [`GradingSystem`](crate::registry::GradingSystem).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradingPolicy {
    #[serde(default)]
    pub letter: LetterThresholds,
    #[serde(default)]
    pub performance: PerformanceThresholds,
}

impl GradingPolicy {
    /// Check that every threshold is a valid score and that each ladder is
    /// strictly descending.
    pub fn validate(&self) -> error::Result<()> {
        check_ladder(
            "letter",
            &[
                ("a", self.letter.a),
                ("b", self.letter.b),
                ("c", self.letter.c),
                ("d", self.letter.d),
            ],
        )?;
        check_ladder(
            "performance",
            &[
                ("excellent", self.performance.excellent),
                ("satisfactory", self.performance.satisfactory),
                ("pass", self.performance.pass),
            ],
        )
    }

    /// Map a raw score to a letter grade, highest threshold first.
    pub fn letter_grade(&self, raw: f64) -> error::Result<LetterGrade> {
        let score = Score::new(raw)?;
        Ok(self.letter_for(score))
    }

    pub fn letter_for(&self, score: Score) -> LetterGrade {
        let s = score.value();
        let t = &self.letter;
        if s >= t.a {
            LetterGrade::A
        } else if s >= t.b {
            LetterGrade::B
        } else if s >= t.c {
            LetterGrade::C
        } else if s >= t.d {
            LetterGrade::D
        } else {
            LetterGrade::F
        }
    }

    /// Bucket a recorded score. Never yields `NoGrade` or `Invalid`.
    pub fn performance_for(&self, score: Score) -> PerformanceCategory {
        let s = score.value();
        let t = &self.performance;
        if s >= t.excellent {
            PerformanceCategory::Excellent
        } else if s >= t.satisfactory {
            PerformanceCategory::Satisfactory
        } else if s >= t.pass {
            PerformanceCategory::Pass
        } else {
            PerformanceCategory::Fail
        }
    }
}

fn check_ladder(ladder: &str, steps: &[(&str, f64)]) -> error::Result<()> {
    for &(name, value) in steps {
        if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
            return Err(GradingError::InvalidArgument(format!(
                "{ladder} threshold '{name}' must be between {MIN_SCORE} and {MAX_SCORE}, got {value}"
            )));
        }
    }
    for pair in steps.windows(2) {
        let (upper, upper_value) = pair[0];
        let (lower, lower_value) = pair[1];
        if upper_value <= lower_value {
            return Err(GradingError::InvalidArgument(format!(
                "{ladder} threshold '{upper}' ({upper_value}) must be above '{lower}' ({lower_value})"
            )));
        }
    }
    Ok(())
}

/// Convert a score to a letter grade using the default thresholds.
///
/// Fails with `InvalidArgument` for scores outside `[0, 100]`.
pub fn letter_grade(raw: f64) -> error::Result<LetterGrade> {
    GradingPolicy::default().letter_grade(raw)
}

/// Load the grading policy from well-known paths.
///
/// Search order:
/// 1. the file named by `GRADEBOOK_POLICY`
/// 2. `gradebook.toml` in the current directory
/// 3. `~/.config/gradebook/policy.toml`
///
/// Falls back to [`GradingPolicy::default`] when none exist.
pub fn load_policy() -> Result<GradingPolicy> {
    match std::env::var_os(POLICY_ENV_VAR) {
        Some(path) => load_policy_from(Some(Path::new(&path))),
        None => load_policy_from(None),
    }
}

/// Load a policy from an explicit path, or search the default locations.
pub fn load_policy_from(path: Option<&Path>) -> Result<GradingPolicy> {
    let policy_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("policy file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradebook.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("policy.toml"))
                .filter(|global| global.exists())
        }
    };

    let Some(path) = policy_path else {
        tracing::debug!("no policy file found, using defaults");
        return Ok(GradingPolicy::default());
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read policy: {}", path.display()))?;
    parse_policy_str(&content, &path)
}

/// Parse and validate a policy from TOML text.
pub fn parse_policy_str(content: &str, source_path: &Path) -> Result<GradingPolicy> {
    let policy: GradingPolicy = toml::from_str(content)
        .with_context(|| format!("failed to parse policy: {}", source_path.display()))?;
    if let Err(e) = policy.validate() {
        tracing::warn!("rejecting policy {}: {}", source_path.display(), e);
        return Err(e).with_context(|| format!("invalid policy: {}", source_path.display()));
    }
    Ok(policy)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradebook"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_valid() {
        let policy = GradingPolicy::default();
        assert!(policy.validate().is_ok());
        assert_eq!(policy.letter.a, 90.0);
        assert_eq!(policy.performance.pass, 50.0);
    }

    #[test]
    fn letter_grade_boundaries() {
        let cases = [
            (100.0, LetterGrade::A),
            (90.0, LetterGrade::A),
            (89.99, LetterGrade::B),
            (80.0, LetterGrade::B),
            (79.9, LetterGrade::C),
            (70.0, LetterGrade::C),
            (69.9, LetterGrade::D),
            (60.0, LetterGrade::D),
            (59.99, LetterGrade::F),
            (0.0, LetterGrade::F),
        ];
        for (score, expected) in cases {
            assert_eq!(letter_grade(score).unwrap(), expected, "score {score}");
        }
    }

    #[test]
    fn letter_grade_rejects_out_of_range() {
        for score in [-0.01, -1.0, 100.1, 150.0] {
            assert!(letter_grade(score).unwrap_err().is_invalid_argument());
        }
    }

    #[test]
    fn performance_boundaries() {
        let policy = GradingPolicy::default();
        let bucket = |raw: f64| policy.performance_for(Score::new(raw).unwrap());
        assert_eq!(bucket(85.0), PerformanceCategory::Excellent);
        assert_eq!(bucket(84.9), PerformanceCategory::Satisfactory);
        assert_eq!(bucket(70.0), PerformanceCategory::Satisfactory);
        assert_eq!(bucket(50.0), PerformanceCategory::Pass);
        assert_eq!(bucket(49.9), PerformanceCategory::Fail);
        assert_eq!(bucket(0.0), PerformanceCategory::Fail);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[letter]
a = 93.0
"#;
        let policy = parse_policy_str(toml_str, Path::new("inline.toml")).unwrap();
        assert_eq!(policy.letter.a, 93.0);
        assert_eq!(policy.letter.b, 80.0);
        assert_eq!(policy.performance, PerformanceThresholds::default());
        assert_eq!(policy.letter_grade(91.0).unwrap(), LetterGrade::B);
    }

    #[test]
    fn rejects_non_descending_ladder() {
        let toml_str = r#"
[performance]
excellent = 60.0
satisfactory = 70.0
"#;
        let err = parse_policy_str(toml_str, Path::new("bad.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("excellent"));
    }

    #[test]
    fn rejects_threshold_out_of_range() {
        let policy = GradingPolicy {
            letter: LetterThresholds {
                a: 120.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(policy.validate().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_policy_from(Some(Path::new("/nonexistent/gradebook.toml"))).unwrap_err();
        assert!(err.to_string().contains("policy file not found"));
    }
}
