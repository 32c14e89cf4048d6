use std::fmt;

/// All errors produced by cronpeek.
///
/// Every public operation is total over the space of input strings: bad
/// input comes back as one of these values, never as a panic.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CronError {
    /// Input did not split into exactly five whitespace-separated fields.
    Shape { count: usize },

    /// One field's token failed the grammar or bounds check. Validation is
    /// fail-fast, so this names the first offending field, left to right.
    Field {
        field: &'static str,
        token: String,
        expected: String,
    },
}

impl fmt::Display for CronError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape { count } => write!(
                f,
                "expected 5 fields (minute hour day-of-month month day-of-week), got {count}"
            ),
            Self::Field {
                field,
                token,
                expected,
            } => write!(f, "invalid {field} field '{token}': {expected}"),
        }
    }
}

impl std::error::Error for CronError {}

impl CronError {
    pub fn shape(count: usize) -> Self {
        Self::Shape { count }
    }

    pub fn field(
        field: &'static str,
        token: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::Field {
            field,
            token: token.into(),
            expected: expected.into(),
        }
    }
}
