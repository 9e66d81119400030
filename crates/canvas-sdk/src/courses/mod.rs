//! Course records and term-based classification.

pub mod classifier;
pub mod term;

pub use classifier::{classify_course, classify_courses, Course, CourseClassification, CourseStatus};
pub use term::{AcademicTerm, Term};
