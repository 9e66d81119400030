//! Academic terms and the `(Term Year)` marker embedded in course names.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static TERM_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\((Spring|Summer|Fall) (\d{4})\)").expect("term marker pattern is valid")
});

/// Academic period within a year, ordered by calendar position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Term {
    Spring,
    Summer,
    Fall,
}

impl Term {
    /// Term for a zero-based month (0 = January).
    ///
    /// Jan–May is Spring, Jun–Aug is Summer, Sep–Dec is Fall.
    pub fn from_month0(month0: u32) -> Self {
        match month0 {
            0..=4 => Term::Spring,
            5..=7 => Term::Summer,
            _ => Term::Fall,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spring => write!(f, "Spring"),
            Self::Summer => write!(f, "Summer"),
            Self::Fall => write!(f, "Fall"),
        }
    }
}

impl FromStr for Term {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Spring" => Ok(Term::Spring),
            "Summer" => Ok(Term::Summer),
            "Fall" => Ok(Term::Fall),
            _ => Err(format!(
                "Unknown term '{}'. Valid values: Spring, Summer, Fall",
                s
            )),
        }
    }
}

/// A term within a specific year.
///
/// Field order drives the derived ordering: year first, then term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct AcademicTerm {
    pub year: i32,
    pub term: Term,
}

impl AcademicTerm {
    pub fn new(year: i32, term: Term) -> Self {
        Self { year, term }
    }

    /// The term an instant falls in, by its UTC calendar month.
    pub fn containing(instant: DateTime<Utc>) -> Self {
        Self {
            year: instant.year(),
            term: Term::from_month0(instant.month0()),
        }
    }

    /// Extract the first `(Term YYYY)` marker from a course name.
    pub fn from_course_name(name: &str) -> Option<Self> {
        let captures = TERM_MARKER.captures(name)?;
        let term = captures.get(1)?.as_str().parse().ok()?;
        let year = captures.get(2)?.as_str().parse().ok()?;
        Some(Self { year, term })
    }
}

impl fmt::Display for AcademicTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.term, self.year)
    }
}
