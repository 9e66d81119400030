//! Past/current/future course classification.
//!
//! Precedence per course:
//! 1. A `(Term YYYY)` marker in the name, compared with the term containing `now`.
//! 2. Otherwise a parseable `start_at`, compared with `now`.
//! 3. Otherwise current.
//!
//! Equality at either level classifies as current.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::term::AcademicTerm;

/// A Canvas course record, kept exactly as received.
///
/// Classification only reads `name` and `start_at`; a field with an
/// unexpected type reads as absent and the record is still serialized
/// verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Course(Value);

impl Course {
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn start_at(&self) -> Option<&str> {
        self.0.get("start_at").and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Term marker embedded in the course name, if any.
    pub fn term_marker(&self) -> Option<AcademicTerm> {
        self.name().and_then(AcademicTerm::from_course_name)
    }

    /// `start_at` as an instant. Absent and unparseable values both yield `None`.
    ///
    /// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates, the latter
    /// read as UTC midnight.
    pub fn start_instant(&self) -> Option<DateTime<Utc>> {
        let raw = self.start_at()?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc()),
            Err(e) => {
                debug!(course_id = ?self.id(), start_at = raw, error = %e, "Ignoring unparseable start_at");
                None
            }
        }
    }
}

/// Bucket a course falls into relative to the reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    Past,
    Current,
    Future,
}

impl From<Ordering> for CourseStatus {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Past,
            Ordering::Equal => Self::Current,
            Ordering::Greater => Self::Future,
        }
    }
}

/// Courses partitioned by status, each bucket in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseClassification {
    pub past: Vec<Course>,
    pub current: Vec<Course>,
    pub future: Vec<Course>,
    pub classified_at: DateTime<Utc>,
}

impl CourseClassification {
    pub fn total(&self) -> usize {
        self.past.len() + self.current.len() + self.future.len()
    }
}

/// Classify a single course against `now`, given the term containing `now`.
pub fn classify_course(
    course: &Course,
    now: DateTime<Utc>,
    current_term: AcademicTerm,
) -> CourseStatus {
    if let Some(term) = course.term_marker() {
        return term.cmp(&current_term).into();
    }

    match course.start_instant() {
        Some(start) => start.cmp(&now).into(),
        None => CourseStatus::Current,
    }
}

/// Partition `courses` into past/current/future relative to `now`.
pub fn classify_courses(courses: Vec<Course>, now: DateTime<Utc>) -> CourseClassification {
    let current_term = AcademicTerm::containing(now);
    let mut classification = CourseClassification {
        past: Vec::new(),
        current: Vec::new(),
        future: Vec::new(),
        classified_at: now,
    };

    for course in courses {
        let bucket = match classify_course(&course, now, current_term) {
            CourseStatus::Past => &mut classification.past,
            CourseStatus::Current => &mut classification.current,
            CourseStatus::Future => &mut classification.future,
        };
        bucket.push(course);
    }

    debug!(
        %current_term,
        past = classification.past.len(),
        current = classification.current.len(),
        future = classification.future.len(),
        "Classified courses"
    );

    classification
}
