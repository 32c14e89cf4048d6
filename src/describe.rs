//! English rendering: per-field clauses and the whole-expression sentence.

use crate::catalog::{display_value, FieldSpec};
use crate::field::FieldExpr;
use crate::{CronField, CronSchedule};

/// English clause for a single field, independent of the other four.
pub fn field_clause(expr: &FieldExpr, spec: &FieldSpec) -> String {
    match expr {
        FieldExpr::All => format!("every {}", spec.unit),
        FieldExpr::Step(n) => format!("every {}", unit_count(*n, spec)),
        FieldExpr::Range(a, b) => format!(
            "{} through {}",
            display_value(*a, spec),
            display_value(*b, spec)
        ),
        FieldExpr::RangeStep(a, b, n) => format!(
            "every {} from {} through {}",
            unit_count(*n, spec),
            display_value(*a, spec),
            display_value(*b, spec)
        ),
        FieldExpr::Value(v) => display_value(*v, spec),
        FieldExpr::List(items) => {
            join_list(items.iter().map(|item| field_clause(item, spec)).collect())
        }
    }
}

/// Compose the whole-expression sentence from the five parsed fields.
///
/// The minute/hour pair picks the leading time-of-day form (first match
/// wins); day-of-month, month, and day-of-week qualifiers are appended
/// whenever those fields are restricted.
pub fn describe(schedule: &CronSchedule) -> String {
    let fields = schedule.fields();
    let (dom, month, dow) = (&fields[2], &fields[3], &fields[4]);

    let mut sentence = time_clause(&fields[0], &fields[1]);
    if !dom.expr.is_all() {
        append(
            &mut sentence,
            &format!("on {} of the month", dom.clause()),
        );
    }
    if !month.expr.is_all() {
        append(&mut sentence, &format!("in {}", month.clause()));
    }
    if !dow.expr.is_all() {
        append(&mut sentence, &format!("on {}", dow.clause()));
    }

    if sentence.is_empty() {
        return "Every minute".to_string();
    }
    capitalize(&sentence)
}

fn time_clause(minute: &CronField, hour: &CronField) -> String {
    match (&minute.expr, &hour.expr) {
        (FieldExpr::All, FieldExpr::All) => "every minute".to_string(),
        (FieldExpr::Step(1), FieldExpr::All) => "every minute".to_string(),
        (FieldExpr::Step(n), FieldExpr::All) => format!("every {n} minutes"),
        (FieldExpr::Value(m), FieldExpr::Value(h)) => format!("at {}", clock_12h(*h, *m)),
        (FieldExpr::Value(m), FieldExpr::Step(n)) => {
            format!("at minute {m} past every {}", unit_count(*n, hour.spec))
        }
        _ => {
            let mut parts = Vec::new();
            if !minute.expr.is_all() {
                parts.push(format!("minute {}", minute.clause()));
            }
            if !hour.expr.is_all() {
                parts.push(format!("hour {}", hour.clause()));
            }
            parts.join(", ")
        }
    }
}

/// Standard 12-hour clock: 0 is 12 AM, 13 is 1 PM; minutes zero-padded.
fn clock_12h(hour: u8, minute: u8) -> String {
    let period = if hour < 12 { "AM" } else { "PM" };
    let clock = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{clock}:{minute:02} {period}")
}

/// "N units", collapsing to the singular unit when N is 1.
fn unit_count(n: u8, spec: &FieldSpec) -> String {
    if n == 1 {
        spec.unit.to_string()
    } else {
        format!("{n} {}", spec.unit_plural)
    }
}

/// "x", "x and y", or an Oxford-comma join for three or more.
fn join_list(parts: Vec<String>) -> String {
    match parts.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        _ => match parts.split_last() {
            Some((last, rest)) => format!("{}, and {last}", rest.join(", ")),
            None => String::new(),
        },
    }
}

fn append(sentence: &mut String, clause: &str) {
    if !sentence.is_empty() {
        sentence.push_str(", ");
    }
    sentence.push_str(clause);
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FIELDS;
    use crate::field::parse_field;
    use crate::CronSchedule;

    fn clause(token: &str, field: usize) -> String {
        field_clause(&parse_field(token, &FIELDS[field]).unwrap(), &FIELDS[field])
    }

    fn description(expr: &str) -> String {
        CronSchedule::parse(expr).unwrap().describe()
    }

    // ------------------------------------------------------------------
    // Per-field clauses
    // ------------------------------------------------------------------

    #[test]
    fn test_clause_wildcard() {
        assert_eq!(clause("*", 0), "every minute");
        assert_eq!(clause("*", 4), "every day of the week");
    }

    #[test]
    fn test_clause_step_pluralizes() {
        assert_eq!(clause("*/5", 0), "every 5 minutes");
        assert_eq!(clause("*/1", 0), "every minute");
        assert_eq!(clause("*/2", 2), "every 2 days");
    }

    #[test]
    fn test_clause_range_uses_display_names() {
        assert_eq!(clause("1-5", 4), "Monday through Friday");
        assert_eq!(clause("1-3", 3), "January through March");
        assert_eq!(clause("10-20", 0), "10 through 20");
    }

    #[test]
    fn test_clause_range_with_step() {
        assert_eq!(
            clause("10-20/3", 0),
            "every 3 minutes from 10 through 20"
        );
        assert_eq!(
            clause("JAN-JUN/2", 3),
            "every 2 months from January through June"
        );
    }

    #[test]
    fn test_clause_list_joining() {
        assert_eq!(clause("1,3", 4), "Monday and Wednesday");
        assert_eq!(clause("1,3,5", 4), "Monday, Wednesday, and Friday");
        assert_eq!(clause("1,5-7", 2), "1 and 5 through 7");
    }

    #[test]
    fn test_clause_plain_value() {
        assert_eq!(clause("37", 0), "37");
        assert_eq!(clause("DEC", 3), "December");
    }

    // ------------------------------------------------------------------
    // Whole-expression sentences
    // ------------------------------------------------------------------

    #[test]
    fn test_describe_every_minute() {
        assert_eq!(description("* * * * *"), "Every minute");
    }

    #[test]
    fn test_describe_minute_step() {
        assert_eq!(description("*/15 * * * *"), "Every 15 minutes");
        assert_eq!(description("*/1 * * * *"), "Every minute");
    }

    #[test]
    fn test_describe_fixed_time() {
        assert_eq!(description("0 2 * * *"), "At 2:00 AM");
        assert_eq!(description("0 0 * * *"), "At 12:00 AM");
        assert_eq!(description("30 13 * * *"), "At 1:30 PM");
        assert_eq!(description("5 12 * * *"), "At 12:05 PM");
    }

    #[test]
    fn test_describe_minute_past_hour_step() {
        assert_eq!(description("30 */6 * * *"), "At minute 30 past every 6 hours");
        assert_eq!(description("0 */1 * * *"), "At minute 0 past every hour");
    }

    #[test]
    fn test_describe_fallback_joins_field_clauses() {
        assert_eq!(description("10-20 * * * *"), "Minute 10 through 20");
        assert_eq!(description("* 9 * * *"), "Hour 9");
        assert_eq!(
            description("0-30 9-17 * * *"),
            "Minute 0 through 30, hour 9 through 17"
        );
    }

    #[test]
    fn test_describe_appends_day_qualifiers() {
        assert_eq!(
            description("0 2 1,15 * *"),
            "At 2:00 AM, on 1 and 15 of the month"
        );
        assert_eq!(description("0 2 * 6 *"), "At 2:00 AM, in June");
        assert_eq!(
            description("30 3 * * 1-5"),
            "At 3:30 AM, on Monday through Friday"
        );
        assert_eq!(
            description("* * 1 1 0"),
            "Every minute, on 1 of the month, in January, on Sunday"
        );
    }

    #[test]
    fn test_describe_wildcard_minute_with_qualifiers() {
        assert_eq!(
            description("* * * * MON"),
            "Every minute, on Monday"
        );
    }
}
