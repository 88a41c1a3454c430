//! Course records.

use serde::{Deserialize, Serialize};

use crate::student::Student;

/// A course and the students enrolled in it.
///
/// The course does not own its students. It keeps their ids in enrollment
/// order; the registry resolves them back to [`Student`] records. Ids are
/// unique within a registry, so id equality is record identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    code: String,
    name: String,
    #[serde(default)]
    enrolled: Vec<String>,
}

impl Course {
    /// Neither field is validated; empty strings are allowed.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            enrolled: Vec::new(),
        }
    }

    /// Course code, unique within a registry.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append `student` unless already enrolled. Returns `true` if added.
    ///
    /// Duplicates are detected by student id. That equals record identity only
    /// because ids are unique within a registry, so enrollment goes through
    /// [`GradingSystem::enroll`](crate::registry::GradingSystem::enroll).
    pub(crate) fn enroll(&mut self, student: &Student) -> bool {
        if self.contains(student.id()) {
            return false;
        }
        self.enrolled.push(student.id().to_string());
        true
    }

    /// Whether the student with `student_id` is enrolled.
    pub fn contains(&self, student_id: &str) -> bool {
        self.enrolled.iter().any(|id| id == student_id)
    }

    /// Enrolled student ids in insertion order.
    pub fn enrolled_ids(&self) -> &[String] {
        &self.enrolled
    }

    /// Number of enrolled students.
    pub fn len(&self) -> usize {
        self.enrolled.len()
    }

    /// `true` when nobody is enrolled.
    pub fn is_empty(&self) -> bool {
        self.enrolled.is_empty()
    }
}
