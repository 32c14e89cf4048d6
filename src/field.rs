//! Single-field grammar: validation and expansion.
//!
//! A token is checked against the grammar in precedence order (wildcard,
//! wildcard step, comma list, range with step, range, plain value) and
//! parsed into a [`FieldExpr`]. Expansion turns a parsed expression into the
//! concrete ascending set of values it selects.

use crate::catalog::{self, FieldSpec};
use crate::error::CronError;

/// Parsed form of one validated field token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldExpr {
    /// `*`
    All,
    /// `*/N`
    Step(u8),
    /// `A-B`
    Range(u8, u8),
    /// `A-B/N`
    RangeStep(u8, u8, u8),
    /// A plain value.
    Value(u8),
    /// Comma list; items are `Value`, `Range`, or `RangeStep` only.
    List(Vec<FieldExpr>),
}

impl FieldExpr {
    /// Expand to the ascending, duplicate-free set of values this
    /// expression selects within the field's bounds.
    pub fn expand(&self, spec: &FieldSpec) -> Vec<u8> {
        match self {
            Self::All => (spec.min..=spec.max).collect(),
            Self::Step(n) => (spec.min..=spec.max).step_by(*n as usize).collect(),
            Self::Range(a, b) => (*a..=*b).collect(),
            Self::RangeStep(a, b, n) => (*a..=*b).step_by(*n as usize).collect(),
            Self::Value(v) => vec![*v],
            Self::List(items) => {
                let mut values: Vec<u8> = items.iter().flat_map(|item| item.expand(spec)).collect();
                values.sort_unstable();
                values.dedup();
                values
            }
        }
    }

    /// True when the expression is the bare wildcard.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// Validate a raw token against a field's grammar and bounds.
///
/// Name aliases are resolved first, so `MON-FRI` and `1-5` parse alike.
pub fn parse_field(raw: &str, spec: &FieldSpec) -> Result<FieldExpr, CronError> {
    let resolved = catalog::resolve_aliases(raw, spec);
    parse_resolved(&resolved, raw, spec)
}

/// Validate and expand a raw token in one step.
///
/// A token that fails validation comes back as an error, never as an empty
/// set.
pub fn expand_token(raw: &str, spec: &FieldSpec) -> Result<Vec<u8>, CronError> {
    Ok(parse_field(raw, spec)?.expand(spec))
}

/// Parse an already alias-resolved token. `raw` is only used for errors.
pub(crate) fn parse_resolved(
    token: &str,
    raw: &str,
    spec: &FieldSpec,
) -> Result<FieldExpr, CronError> {
    if token == "*" {
        return Ok(FieldExpr::All);
    }

    if let Some(step) = token.strip_prefix("*/") {
        let n = parse_number(step, raw, spec)?;
        if n == 0 || n > spec.max {
            return Err(field_error(raw, spec));
        }
        return Ok(FieldExpr::Step(n));
    }

    if token.contains(',') {
        let items = token
            .split(',')
            .map(|part| parse_element(part, raw, spec))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(FieldExpr::List(items));
    }

    parse_element(token, raw, spec)
}

/// Parse one list element (or a bare non-list token): rules 4-6 of the
/// grammar. Wildcards are not valid here.
fn parse_element(part: &str, raw: &str, spec: &FieldSpec) -> Result<FieldExpr, CronError> {
    if let Some((range, step)) = part.split_once('/') {
        let (a, b) = parse_range(range, raw, spec)?;
        let n = parse_number(step, raw, spec)?;
        if n == 0 {
            return Err(field_error(raw, spec));
        }
        return Ok(FieldExpr::RangeStep(a, b, n));
    }

    if part.contains('-') {
        let (a, b) = parse_range(part, raw, spec)?;
        return Ok(FieldExpr::Range(a, b));
    }

    Ok(FieldExpr::Value(parse_bounded(part, raw, spec)?))
}

fn parse_range(range: &str, raw: &str, spec: &FieldSpec) -> Result<(u8, u8), CronError> {
    let Some((a, b)) = range.split_once('-') else {
        return Err(field_error(raw, spec));
    };
    let a = parse_bounded(a, raw, spec)?;
    let b = parse_bounded(b, raw, spec)?;
    if a > b {
        return Err(field_error(raw, spec));
    }
    Ok((a, b))
}

fn parse_bounded(text: &str, raw: &str, spec: &FieldSpec) -> Result<u8, CronError> {
    let value = parse_number(text, raw, spec)?;
    if value < spec.min || value > spec.max {
        return Err(field_error(raw, spec));
    }
    Ok(value)
}

fn parse_number(text: &str, raw: &str, spec: &FieldSpec) -> Result<u8, CronError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(field_error(raw, spec));
    }
    text.parse().map_err(|_| field_error(raw, spec))
}

fn field_error(raw: &str, spec: &FieldSpec) -> CronError {
    CronError::field(spec.name, raw, catalog::expected_text(spec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FIELDS;

    fn minute() -> &'static FieldSpec {
        &FIELDS[0]
    }

    fn dom() -> &'static FieldSpec {
        &FIELDS[2]
    }

    #[test]
    fn test_parse_wildcard() {
        assert_eq!(parse_field("*", minute()).unwrap(), FieldExpr::All);
    }

    #[test]
    fn test_parse_step() {
        assert_eq!(parse_field("*/5", minute()).unwrap(), FieldExpr::Step(5));
    }

    #[test]
    fn test_parse_range_with_step() {
        assert_eq!(
            parse_field("10-20/3", minute()).unwrap(),
            FieldExpr::RangeStep(10, 20, 3)
        );
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(
            parse_field("1,3,5-7", dom()).unwrap(),
            FieldExpr::List(vec![
                FieldExpr::Value(1),
                FieldExpr::Value(3),
                FieldExpr::Range(5, 7),
            ])
        );
    }

    #[test]
    fn test_parse_weekday_alias_range() {
        assert_eq!(
            parse_field("MON-FRI", &FIELDS[4]).unwrap(),
            FieldExpr::Range(1, 5)
        );
    }

    #[test]
    fn test_reject_out_of_range_value() {
        assert!(parse_field("60", minute()).is_err());
        assert!(parse_field("0", dom()).is_err());
    }

    #[test]
    fn test_reject_zero_step() {
        assert!(parse_field("*/0", minute()).is_err());
        assert!(parse_field("1-10/0", minute()).is_err());
    }

    #[test]
    fn test_reject_oversized_step() {
        assert!(parse_field("*/60", minute()).is_err());
    }

    #[test]
    fn test_reject_descending_range() {
        assert!(parse_field("20-10", minute()).is_err());
    }

    #[test]
    fn test_reject_wildcard_inside_list() {
        assert!(parse_field("*,5", minute()).is_err());
        assert!(parse_field("*/5,10", minute()).is_err());
    }

    #[test]
    fn test_reject_garbage() {
        assert!(parse_field("", minute()).is_err());
        assert!(parse_field("abc", minute()).is_err());
        assert!(parse_field("1-", minute()).is_err());
        assert!(parse_field("-5", minute()).is_err());
        assert!(parse_field("5/3", minute()).is_err());
        assert!(parse_field("+5", minute()).is_err());
    }

    #[test]
    fn test_error_names_field_token_and_range() {
        let err = parse_field("60", minute()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid minute field '60': allowed values 0-59"
        );

        let err = parse_field("8", &FIELDS[4]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid day of week field '8': allowed values 0-6 or SUN-SAT"
        );
    }

    #[test]
    fn test_expand_wildcard_is_complete() {
        let values = expand_token("*", minute()).unwrap();
        assert_eq!(values.len(), 60);
        assert_eq!(values.first(), Some(&0));
        assert_eq!(values.last(), Some(&59));
    }

    #[test]
    fn test_expand_step_covers_from_min() {
        assert_eq!(
            expand_token("*/5", minute()).unwrap(),
            vec![0, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55]
        );
    }

    #[test]
    fn test_expand_range_step_stops_at_range_end() {
        assert_eq!(expand_token("10-20/3", minute()).unwrap(), vec![10, 13, 16, 19]);
    }

    #[test]
    fn test_expand_list_unions_and_dedups() {
        assert_eq!(expand_token("1,3,5-7", dom()).unwrap(), vec![1, 3, 5, 6, 7]);
        assert_eq!(expand_token("5,1-6", dom()).unwrap(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_expand_value_is_singleton() {
        assert_eq!(expand_token("37", minute()).unwrap(), vec![37]);
    }

    #[test]
    fn test_expand_dom_step_starts_at_one() {
        assert_eq!(
            expand_token("*/10", dom()).unwrap(),
            vec![1, 11, 21, 31]
        );
    }
}
