//! Static definitions of the five field slots and their name aliases.

/// Position of a field within a cron expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

/// Immutable definition of one field slot.
///
/// Exactly five instances exist, in fixed order, in [`FIELDS`]. The `unit`
/// pair feeds clause building ("every 5 minutes"); `aliases`, when present,
/// is the three-letter name table whose index maps to `min + index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub kind: FieldKind,
    pub name: &'static str,
    pub min: u8,
    pub max: u8,
    pub unit: &'static str,
    pub unit_plural: &'static str,
    pub aliases: Option<&'static [&'static str]>,
}

/// Three-letter month names, `JAN` = 1.
pub static MONTH_ABBR: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Three-letter weekday names, `SUN` = 0.
pub static DAY_ABBR: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

pub(crate) static MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub(crate) static DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// The field catalog, in expression order.
pub static FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        kind: FieldKind::Minute,
        name: "minute",
        min: 0,
        max: 59,
        unit: "minute",
        unit_plural: "minutes",
        aliases: None,
    },
    FieldSpec {
        kind: FieldKind::Hour,
        name: "hour",
        min: 0,
        max: 23,
        unit: "hour",
        unit_plural: "hours",
        aliases: None,
    },
    FieldSpec {
        kind: FieldKind::DayOfMonth,
        name: "day of month",
        min: 1,
        max: 31,
        unit: "day",
        unit_plural: "days",
        aliases: None,
    },
    FieldSpec {
        kind: FieldKind::Month,
        name: "month",
        min: 1,
        max: 12,
        unit: "month",
        unit_plural: "months",
        aliases: Some(&MONTH_ABBR),
    },
    FieldSpec {
        kind: FieldKind::DayOfWeek,
        name: "day of week",
        min: 0,
        max: 6,
        unit: "day of the week",
        unit_plural: "days of the week",
        aliases: Some(&DAY_ABBR),
    },
];

/// Rewrite three-letter month/weekday names into their numeric values.
///
/// Every maximal run of ASCII-alphabetic characters is case-insensitively
/// matched against the field's alias table; unmatched runs pass through
/// untouched so the validator can reject them. Fields without an alias
/// table pass through unchanged. Idempotent on already-numeric input.
pub fn resolve_aliases(token: &str, spec: &FieldSpec) -> String {
    let Some(table) = spec.aliases else {
        return token.to_string();
    };

    let mut out = String::with_capacity(token.len());
    let mut run = String::new();
    for c in token.chars() {
        if c.is_ascii_alphabetic() {
            run.push(c);
        } else {
            flush_run(&mut out, &run, table, spec);
            run.clear();
            out.push(c);
        }
    }
    flush_run(&mut out, &run, table, spec);
    out
}

fn flush_run(out: &mut String, run: &str, table: &[&str], spec: &FieldSpec) {
    if run.is_empty() {
        return;
    }
    match table.iter().position(|a| a.eq_ignore_ascii_case(run)) {
        Some(idx) => out.push_str(&(spec.min + idx as u8).to_string()),
        None => out.push_str(run),
    }
}

/// Display form of a single value: month and weekday names for the fields
/// that have them, plain numbers otherwise.
pub(crate) fn display_value(value: u8, spec: &FieldSpec) -> String {
    let name = match spec.kind {
        FieldKind::Month => (value as usize)
            .checked_sub(spec.min as usize)
            .and_then(|i| MONTH_NAMES.get(i)),
        FieldKind::DayOfWeek => DAY_NAMES.get(value as usize),
        _ => None,
    };
    match name {
        Some(name) => (*name).to_string(),
        None => value.to_string(),
    }
}

/// Text describing what a field accepts, used in validation errors.
pub(crate) fn expected_text(spec: &FieldSpec) -> String {
    match spec.aliases {
        Some(table) => format!(
            "allowed values {}-{} or {}-{}",
            spec.min,
            spec.max,
            table[0],
            table[table.len() - 1]
        ),
        None => format!("allowed values {}-{}", spec.min, spec.max),
    }
}
