//! Expression assembly: the builder, preset schedules, and the curated
//! per-field option lists used to drive selection UIs.

use crate::catalog::{DAY_NAMES, MONTH_NAMES};

/// The five chosen field strings, in expression order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChoices {
    pub minute: String,
    pub hour: String,
    pub day_of_month: String,
    pub month: String,
    pub day_of_week: String,
}

impl Default for FieldChoices {
    fn default() -> Self {
        Self {
            minute: "*".to_string(),
            hour: "*".to_string(),
            day_of_month: "*".to_string(),
            month: "*".to_string(),
            day_of_week: "*".to_string(),
        }
    }
}

/// Join the five chosen fields into a raw expression.
///
/// Performs no validation; hand the result to
/// [`CronSchedule::parse`](crate::CronSchedule::parse) when a validated
/// schedule is required.
pub fn build(choices: &FieldChoices) -> String {
    format!(
        "{} {} {} {} {}",
        choices.minute, choices.hour, choices.day_of_month, choices.month, choices.day_of_week
    )
}

/// A quick-start schedule offered for selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub label: &'static str,
    pub expression: &'static str,
    pub description: &'static str,
}

/// Common schedules, in display order. Every expression parses.
pub static PRESETS: [Preset; 8] = [
    Preset {
        label: "Every minute",
        expression: "* * * * *",
        description: "Runs at the top of every minute",
    },
    Preset {
        label: "Every 5 minutes",
        expression: "*/5 * * * *",
        description: "Runs twelve times an hour",
    },
    Preset {
        label: "Every 15 minutes",
        expression: "*/15 * * * *",
        description: "Runs four times an hour",
    },
    Preset {
        label: "Hourly",
        expression: "0 * * * *",
        description: "Runs at minute 0 of every hour",
    },
    Preset {
        label: "Daily at midnight",
        expression: "0 0 * * *",
        description: "Runs once a day at 12:00 AM",
    },
    Preset {
        label: "Weekdays at 9 AM",
        expression: "0 9 * * 1-5",
        description: "Runs Monday through Friday at 9:00 AM",
    },
    Preset {
        label: "Weekly on Sunday",
        expression: "0 0 * * 0",
        description: "Runs every Sunday at 12:00 AM",
    },
    Preset {
        label: "Monthly on the 1st",
        expression: "0 0 1 * *",
        description: "Runs on the first day of every month at 12:00 AM",
    },
];

/// One selectable value for a field dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

fn option(value: impl Into<String>, label: impl Into<String>) -> FieldOption {
    FieldOption {
        value: value.into(),
        label: label.into(),
    }
}

/// Options for the minute field.
pub fn minute_options() -> Vec<FieldOption> {
    let mut options = vec![
        option("*", "Every minute"),
        option("*/5", "Every 5 minutes (*/5)"),
        option("*/10", "Every 10 minutes (*/10)"),
        option("*/15", "Every 15 minutes (*/15)"),
        option("*/30", "Every 30 minutes (*/30)"),
    ];
    options.extend((0u8..60).map(|m| option(m.to_string(), format!("At minute {m}"))));
    options
}

/// Options for the hour field.
pub fn hour_options() -> Vec<FieldOption> {
    let mut options = vec![
        option("*", "Every hour"),
        option("*/2", "Every 2 hours (*/2)"),
        option("*/3", "Every 3 hours (*/3)"),
        option("*/6", "Every 6 hours (*/6)"),
        option("*/12", "Every 12 hours (*/12)"),
    ];
    options.extend((0u8..24).map(|h| option(h.to_string(), format!("At {}", hour_label(h)))));
    options
}

/// Options for the day-of-month field.
pub fn day_of_month_options() -> Vec<FieldOption> {
    let mut options = vec![option("*", "Every day")];
    options.extend((1u8..=31).map(|d| option(d.to_string(), format!("On day {d}"))));
    options
}

/// Options for the month field.
pub fn month_options() -> Vec<FieldOption> {
    let mut options = vec![option("*", "Every month")];
    options.extend(
        (1u8..=12).map(|m| {
            option(
                m.to_string(),
                format!("In {}", MONTH_NAMES[m as usize - 1]),
            )
        }),
    );
    options
}

/// Options for the day-of-week field.
pub fn day_of_week_options() -> Vec<FieldOption> {
    let mut options = vec![
        option("*", "Every day of the week"),
        option("1-5", "Weekdays (1-5)"),
        option("0,6", "Weekends (0,6)"),
    ];
    options.extend((0u8..7).map(|d| option(d.to_string(), format!("On {}", DAY_NAMES[d as usize]))));
    options
}

fn hour_label(hour: u8) -> String {
    let period = if hour < 12 { "AM" } else { "PM" };
    let clock = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{clock} {period}")
}
