//! The grading registry.
//!
//! [`GradingSystem`] owns every [`Student`] and [`Course`], keyed by their
//! identifiers, and answers the derived queries: letter grades, course
//! averages, performance categories and exam eligibility.
//!
//! Identifier-based mutations are strict and fail with `NotFound` or
//! `DuplicateId`. Two queries are soft: [`GradingSystem::course_average`]
//! and [`GradingSystem::performance_category`] report unknown ids as `0.0`
//! and [`PerformanceCategory::Invalid`] instead of failing. Each operation
//! either completes or leaves the registry unchanged.

use std::collections::HashMap;

use tracing::instrument;

use crate::course::Course;
use crate::error::{EntityKind, GradingError, Result};
use crate::model::{ExamEligibility, LetterGrade, PerformanceCategory};
use crate::policy::GradingPolicy;
use crate::statistics::{mean, CourseSummary};
use crate::student::Student;

/// In-memory registry of students, courses and scores.
///
/// Not synchronized. Callers sharing one across threads must guard the whole
/// registry with a single lock, since an average reads many students.
#[derive(Debug, Clone, Default)]
pub struct GradingSystem {
    students: HashMap<String, Student>,
    courses: HashMap<String, Course>,
    policy: GradingPolicy,
}

impl GradingSystem {
    /// An empty registry using the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty registry using `policy` for letter grades and performance
    /// categories.
    ///
    /// Fails with `InvalidArgument` if [`GradingPolicy::validate`] rejects it.
    pub fn with_policy(policy: GradingPolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self {
            policy,
            ..Self::default()
        })
    }

    /// Thresholds in effect for this registry.
    pub fn policy(&self) -> &GradingPolicy {
        &self.policy
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Register a new student.
    pub fn add_student(&mut self, id: &str, first_name: &str, last_name: &str) -> Result<()> {
        if self.students.contains_key(id) {
            return Err(GradingError::duplicate(EntityKind::Student, id));
        }
        self.students.insert(id.to_string(), Student::new(id, first_name, last_name));
        tracing::debug!(student = id, "student added");
        Ok(())
    }

    /// Register a new course.
    pub fn add_course(&mut self, code: &str, name: &str) -> Result<()> {
        if self.courses.contains_key(code) {
            return Err(GradingError::duplicate(EntityKind::Course, code));
        }
        self.courses.insert(code.to_string(), Course::new(code, name));
        tracing::debug!(course = code, "course added");
        Ok(())
    }

    /// Enroll a registered student in a registered course.
    ///
    /// Returns `false` if the student was already enrolled, which is not an
    /// error.
    pub fn enroll(&mut self, student_id: &str, course_code: &str) -> Result<bool> {
        let student = self
            .students
            .get(student_id)
            .ok_or_else(|| GradingError::not_found(EntityKind::Student, student_id))?;
        let course = self
            .courses
            .get_mut(course_code)
            .ok_or_else(|| GradingError::not_found(EntityKind::Course, course_code))?;

        let added = course.enroll(student);
        if added {
            tracing::debug!(student = student_id, course = course_code, "student enrolled");
        } else {
            tracing::debug!(
                student = student_id,
                course = course_code,
                "already enrolled, ignoring"
            );
        }
        Ok(added)
    }

    /// Record `score` for the student in the course, replacing any earlier one.
    ///
    /// Both ids must exist; enrollment is not required. Unknown ids are
    /// reported before an out-of-range score.
    #[instrument(skip(self))]
    pub fn assign_score(
        &mut self,
        student_id: &str,
        course_code: &str,
        score: f64,
    ) -> Result<()> {
        let known_course = self.courses.contains_key(course_code);
        let student = self
            .students
            .get_mut(student_id)
            .ok_or_else(|| GradingError::not_found(EntityKind::Student, student_id))?;
        if !known_course {
            return Err(GradingError::not_found(EntityKind::Course, course_code));
        }

        student.set_score(course_code, score)?;
        tracing::debug!("score assigned");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Mean score over the course's enrolled students that have a score.
    ///
    /// Returns `0.0` for an unknown course or when nobody is scored.
    pub fn course_average(&self, course_code: &str) -> f64 {
        let Some(course) = self.courses.get(course_code) else {
            tracing::debug!(course = course_code, "average requested for unknown course");
            return 0.0;
        };
        mean(self.resolve(course).filter_map(|student| student.score(course_code)))
    }

    /// Letter grade for `score` under this registry's policy.
    ///
    /// See [`letter_grade`](crate::policy::letter_grade) for the policy-free
    /// form.
    pub fn letter_grade(&self, score: f64) -> Result<LetterGrade> {
        self.policy.letter_grade(score)
    }

    /// Performance category of a student in a course.
    ///
    /// Unknown ids yield [`PerformanceCategory::Invalid`]; a missing score
    /// yields [`PerformanceCategory::NoGrade`].
    pub fn performance_category(
        &self,
        student_id: &str,
        course_code: &str,
    ) -> PerformanceCategory {
        let student = match self.students.get(student_id) {
            Some(student) if self.courses.contains_key(course_code) => student,
            _ => {
                tracing::debug!(
                    student = student_id,
                    course = course_code,
                    "performance requested for unknown id"
                );
                return PerformanceCategory::Invalid;
            }
        };

        match student.score(course_code) {
            Some(score) => self.policy.performance_for(score),
            None => PerformanceCategory::NoGrade,
        }
    }

    /// Decide whether a student may sit the course exam.
    ///
    /// First matching rule wins:
    /// 1. incomplete attendance: not eligible
    /// 2. a discipline penalty: not eligible
    /// 3. no score for the course: conditional
    /// 4. otherwise eligible
    ///
    /// Enrollment is not consulted. Unknown ids fail with `NotFound`.
    pub fn exam_eligibility(
        &self,
        student_id: &str,
        course_code: &str,
        attendance_complete: bool,
        has_discipline_penalty: bool,
    ) -> Result<ExamEligibility> {
        let student = self
            .students
            .get(student_id)
            .ok_or_else(|| GradingError::not_found(EntityKind::Student, student_id))?;
        if !self.courses.contains_key(course_code) {
            return Err(GradingError::not_found(EntityKind::Course, course_code));
        }

        let eligibility = if !attendance_complete || has_discipline_penalty {
            ExamEligibility::NotEligible
        } else if !student.has_score(course_code) {
            ExamEligibility::Conditional
        } else {
            ExamEligibility::Eligible
        };
        Ok(eligibility)
    }

    /// Aggregate results for one course, or `None` if it is unknown.
    pub fn course_summary(&self, course_code: &str) -> Option<CourseSummary> {
        let course = self.courses.get(course_code)?;
        Some(CourseSummary::compute(course, self.resolve(course), &self.policy))
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Number of registered students.
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Number of registered courses.
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Look up a student; `None` when unknown.
    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    /// Look up a course; `None` when unknown.
    pub fn course(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    /// All registered courses, in no particular order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    /// The students enrolled in a course, in enrollment order.
    pub fn roster(&self, course_code: &str) -> Option<Vec<&Student>> {
        let course = self.courses.get(course_code)?;
        Some(self.resolve(course).collect())
    }

    fn resolve<'a>(&'a self, course: &'a Course) -> impl Iterator<Item = &'a Student> + 'a {
        course
            .enrolled_ids()
            .iter()
            .filter_map(|id| self.students.get(id))
    }
}
