//! Occurrence simulation: a minute-stepping search for upcoming matches.
//!
//! The walk starts strictly after the reference instant, truncated to
//! minute resolution, and tests each candidate minute against the five
//! expanded sets. A step cap bounds the search instead of a timeout.

use jiff::{Span, Zoned};

use crate::CronSchedule;

/// Upper bound on simulation steps: one year of minutes (365.25 days).
///
/// Schedules that cannot match within a year of the starting instant come
/// back short; unsatisfiable combinations (day 31 in February) come back
/// empty. Neither is an error.
pub const STEP_CAP: usize = 525_960;

/// The five expanded sets, in field order.
pub(crate) struct ExpandedSets {
    minutes: Vec<u8>,
    hours: Vec<u8>,
    days_of_month: Vec<u8>,
    months: Vec<u8>,
    days_of_week: Vec<u8>,
}

impl ExpandedSets {
    pub(crate) fn new(schedule: &CronSchedule) -> Self {
        let fields = schedule.fields();
        Self {
            minutes: fields[0].expand(),
            hours: fields[1].expand(),
            days_of_month: fields[2].expand(),
            months: fields[3].expand(),
            days_of_week: fields[4].expand(),
        }
    }

    /// Acceptance test. Day-of-month and day-of-week both have to hold:
    /// AND semantics, not the POSIX either-matches rule.
    fn matches(&self, t: &Zoned) -> bool {
        self.months.contains(&(t.month() as u8))
            && self.days_of_month.contains(&(t.day() as u8))
            && self
                .days_of_week
                .contains(&(t.weekday().to_sunday_zero_offset() as u8))
            && self.hours.contains(&(t.hour() as u8))
            && self.minutes.contains(&(t.minute() as u8))
    }
}

/// Truncate `now` to the minute and step one minute past it, so a
/// currently-matching minute is never reported as upcoming.
fn first_candidate(now: &Zoned) -> Option<Zoned> {
    now.with()
        .second(0)
        .subsec_nanosecond(0)
        .build()
        .ok()?
        .checked_add(Span::new().minutes(1))
        .ok()
}

fn advance(t: &Zoned) -> Option<Zoned> {
    t.checked_add(Span::new().minutes(1)).ok()
}

/// Check whether an instant matches all five fields of a schedule.
pub fn matches(schedule: &CronSchedule, t: &Zoned) -> bool {
    ExpandedSets::new(schedule).matches(t)
}

/// Next occurrence strictly after `now`, if one lands within the cap.
pub fn next_from(schedule: &CronSchedule, now: &Zoned) -> Option<Zoned> {
    next_n_from(schedule, now, 1).into_iter().next()
}

/// Next `n` occurrences strictly after `now`, in ascending order.
///
/// Returns fewer than `n` when [`STEP_CAP`] minutes are exhausted first.
pub fn next_n_from(schedule: &CronSchedule, now: &Zoned, n: usize) -> Vec<Zoned> {
    let sets = ExpandedSets::new(schedule);
    let mut runs = Vec::with_capacity(n.min(64));
    let Some(mut candidate) = first_candidate(now) else {
        return runs;
    };
    for _ in 0..STEP_CAP {
        if runs.len() == n {
            break;
        }
        if sets.matches(&candidate) {
            runs.push(candidate.clone());
        }
        match advance(&candidate) {
            Some(next) => candidate = next,
            None => break,
        }
    }
    runs
}

/// Lazy iterator over occurrences strictly after a starting instant.
///
/// Each `next()` call scans at most [`STEP_CAP`] minutes past the previous
/// result before yielding `None`, so iteration over an unsatisfiable
/// schedule still terminates.
pub struct Upcoming {
    sets: ExpandedSets,
    cursor: Option<Zoned>,
}

impl Upcoming {
    pub(crate) fn new(schedule: &CronSchedule, from: &Zoned) -> Self {
        Self {
            sets: ExpandedSets::new(schedule),
            cursor: first_candidate(from),
        }
    }
}

impl Iterator for Upcoming {
    type Item = Zoned;

    fn next(&mut self) -> Option<Zoned> {
        let mut candidate = self.cursor.take()?;
        for _ in 0..STEP_CAP {
            let hit = self.sets.matches(&candidate);
            let next = advance(&candidate);
            if hit {
                self.cursor = next;
                return Some(candidate);
            }
            candidate = next?;
        }
        None
    }
}
