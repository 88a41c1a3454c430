//! gradebook-core — In-memory academic records and grade derivations.
//!
//! This crate keeps students, courses, enrollments and per-course scores in a
//! [`GradingSystem`], and derives letter grades, course averages, performance
//! categories and exam eligibility from them.

pub mod course;
pub mod error;
pub mod model;
pub mod policy;
pub mod registry;
pub mod statistics;
pub mod student;

pub use course::Course;
pub use error::{EntityKind, GradingError, Result};
pub use model::{ExamEligibility, LetterGrade, PerformanceCategory, Score};
pub use policy::{letter_grade, load_policy, load_policy_from, GradingPolicy};
pub use registry::GradingSystem;
pub use statistics::CourseSummary;
pub use student::Student;
