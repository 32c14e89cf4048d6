//! cronpeek — five-field cron expressions: parse, explain, preview.
//!
//! Parses the standard five-field cron grammar (wildcards, steps, ranges,
//! lists, month/weekday names), renders an English description, and
//! computes upcoming runs by simulating forward minute by minute.
//!
//! # Examples
//!
//! ```
//! use cronpeek::CronSchedule;
//!
//! let schedule: CronSchedule = "0 9 * * 1-5".parse().unwrap();
//! assert_eq!(schedule.describe(), "At 9:00 AM, on Monday through Friday");
//! ```

pub mod builder;
pub mod catalog;
pub mod describe;
pub mod error;
pub mod eval;
pub mod field;

pub use builder::{build, FieldChoices, FieldOption, Preset, PRESETS};
pub use catalog::{resolve_aliases, FieldKind, FieldSpec, DAY_ABBR, FIELDS, MONTH_ABBR};
pub use error::CronError;
pub use eval::{Upcoming, STEP_CAP};
pub use field::{expand_token, parse_field, FieldExpr};

use jiff::Zoned;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One parsed field: the raw token as typed, its alias-resolved form, and
/// the expression it denotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronField {
    pub spec: &'static FieldSpec,
    pub raw: String,
    pub resolved: String,
    pub expr: FieldExpr,
}

impl CronField {
    /// Expand to the concrete set of values this field selects.
    pub fn expand(&self) -> Vec<u8> {
        self.expr.expand(self.spec)
    }

    /// English clause for this field alone.
    pub fn clause(&self) -> String {
        describe::field_clause(&self.expr, self.spec)
    }
}

/// A validated five-field cron schedule.
///
/// Holds no state beyond the parsed fields; every evaluation is a pure
/// function of the schedule and the caller's reference instant, so values
/// can be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronSchedule {
    fields: [CronField; 5],
}

impl CronSchedule {
    /// Parse a five-field cron expression.
    ///
    /// The input must split into exactly five whitespace-separated tokens.
    /// Validation is fail-fast: the first invalid field, left to right,
    /// produces the error, and no expansion happens until all five pass.
    pub fn parse(input: &str) -> Result<Self, CronError> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        if tokens.len() != FIELDS.len() {
            return Err(CronError::shape(tokens.len()));
        }
        Ok(Self {
            fields: [
                Self::parse_one(tokens[0], &FIELDS[0])?,
                Self::parse_one(tokens[1], &FIELDS[1])?,
                Self::parse_one(tokens[2], &FIELDS[2])?,
                Self::parse_one(tokens[3], &FIELDS[3])?,
                Self::parse_one(tokens[4], &FIELDS[4])?,
            ],
        })
    }

    fn parse_one(token: &str, spec: &'static FieldSpec) -> Result<CronField, CronError> {
        let resolved = catalog::resolve_aliases(token, spec);
        let expr = field::parse_resolved(&resolved, token, spec)?;
        Ok(CronField {
            spec,
            raw: token.to_string(),
            resolved,
            expr,
        })
    }

    /// The five parsed fields, in fixed order.
    pub fn fields(&self) -> &[CronField; 5] {
        &self.fields
    }

    /// English description of the whole expression.
    pub fn describe(&self) -> String {
        describe::describe(self)
    }

    /// Check whether an instant matches all five fields.
    pub fn matches(&self, t: &Zoned) -> bool {
        eval::matches(self, t)
    }

    /// Next occurrence strictly after `now`, if one lands within the
    /// simulation cap.
    pub fn next_from(&self, now: &Zoned) -> Option<Zoned> {
        eval::next_from(self, now)
    }

    /// Next `n` occurrences strictly after `now`, ascending. May return
    /// fewer than `n` when the simulation cap is reached first.
    pub fn next_n_from(&self, now: &Zoned, n: usize) -> Vec<Zoned> {
        eval::next_n_from(self, now, n)
    }

    /// Lazy iterator over occurrences strictly after `from`.
    pub fn upcoming(&self, from: &Zoned) -> Upcoming {
        Upcoming::new(self, from)
    }

    /// Full report: per-field breakdown, description, and upcoming runs.
    pub fn report(&self, now: &Zoned, runs: usize) -> ScheduleReport {
        ScheduleReport {
            fields: self
                .fields
                .iter()
                .map(|field| FieldReport {
                    name: field.spec.name,
                    value: field.raw.clone(),
                    description: field.clause(),
                })
                .collect(),
            description: self.describe(),
            next_runs: self.next_n_from(now, runs),
        }
    }
}

/// Parse an expression and produce its full report in one call.
pub fn inspect(input: &str, now: &Zoned, runs: usize) -> Result<ScheduleReport, CronError> {
    Ok(CronSchedule::parse(input)?.report(now, runs))
}

/// Per-field entry of a [`ScheduleReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FieldReport {
    pub name: &'static str,
    pub value: String,
    pub description: String,
}

/// Everything the parse operation produces for a valid expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleReport {
    pub fields: Vec<FieldReport>,
    pub description: String,
    pub next_runs: Vec<Zoned>,
}

impl fmt::Display for CronSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", field.raw)?;
        }
        Ok(())
    }
}

impl FromStr for CronSchedule {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for CronSchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CronSchedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Deserialize from the expression string
        let s = String::deserialize(deserializer)?;
        CronSchedule::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_rejoins_raw_tokens() {
        let schedule = CronSchedule::parse("*/15 0 1,15 JAN MON-FRI").unwrap();
        assert_eq!(schedule.to_string(), "*/15 0 1,15 JAN MON-FRI");
    }

    #[test]
    fn test_shape_error_before_field_inspection() {
        // Four tokens, one of them garbage: the count is reported, not the
        // bad field.
        assert_eq!(
            CronSchedule::parse("* * bogus *"),
            Err(CronError::shape(4))
        );
        assert_eq!(
            CronSchedule::parse("* * * * * *"),
            Err(CronError::shape(6))
        );
        assert_eq!(CronSchedule::parse(""), Err(CronError::shape(0)));
    }

    #[test]
    fn test_fail_fast_reports_leftmost_bad_field() {
        let err = CronSchedule::parse("61 25 * * *").unwrap_err();
        assert!(matches!(err, CronError::Field { field: "minute", .. }));
    }

    #[test]
    fn test_fields_keep_raw_and_resolved_forms() {
        let schedule = CronSchedule::parse("0 9 * * MON-FRI").unwrap();
        let dow = &schedule.fields()[4];
        assert_eq!(dow.raw, "MON-FRI");
        assert_eq!(dow.resolved, "1-5");
        assert_eq!(dow.expand(), vec![1, 2, 3, 4, 5]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trips_through_the_expression_string() {
        let schedule = CronSchedule::parse("0 9 * * 1-5").unwrap();
        let json = serde_json::to_string(&schedule).unwrap();
        assert_eq!(json, "\"0 9 * * 1-5\"");
        let back: CronSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schedule);
    }
}
