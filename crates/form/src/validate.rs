//! Draft validation
//!
//! Every rule runs on every call; there is no short-circuit between fields.
//! The resulting report is rebuilt from scratch each time, so it can never
//! hold a stale entry from an earlier attempt.

use std::collections::btree_map::{self, BTreeMap};

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::draft::Draft;
use crate::error::FieldError;
use crate::field::Field;

pub const MAX_DECIMALS: f64 = 18.0;
pub const MAX_SYMBOL_LENGTH: usize = 8;

/// Failing fields of a draft; empty means the draft is valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Field, FieldError> {
        self.errors.iter()
    }

    fn insert(&mut self, error: FieldError) {
        self.errors.insert(error.field(), error);
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = (&'a Field, &'a FieldError);
    type IntoIter = btree_map::Iter<'a, Field, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

struct ReportEntry<'a>(&'a FieldError);

impl Serialize for ReportEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entry = serializer.serialize_struct("FieldError", 2)?;
        entry.serialize_field("kind", &self.0.kind())?;
        entry.serialize_field("message", &self.0.to_string())?;
        entry.end()
    }
}

impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, error) in &self.errors {
            map.serialize_entry(field, &ReportEntry(error))?;
        }
        map.end()
    }
}

/// Parse numeric text the way a number input reports it
///
/// Empty, non-numeric and non-finite text yields `None`.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// 1 to 8 characters, each `A-Z` or `0-9`
pub fn is_valid_symbol(symbol: &str) -> bool {
    symbol
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        && (1..=MAX_SYMBOL_LENGTH).contains(&symbol.len())
}

fn check_name(draft: &Draft) -> Option<FieldError> {
    if draft.name().trim().is_empty() {
        return Some(FieldError::Required(Field::Name));
    }
    None
}

fn check_symbol(draft: &Draft) -> Option<FieldError> {
    let symbol = draft.symbol();
    if symbol.trim().is_empty() {
        return Some(FieldError::Required(Field::Symbol));
    }
    if !is_valid_symbol(symbol) {
        return Some(FieldError::InvalidFormat {
            field: Field::Symbol,
            expected: "1 to 8 uppercase letters or digits",
        });
    }
    None
}

fn check_initial_supply(supply: Option<f64>) -> Option<FieldError> {
    match supply {
        Some(value) if value > 0.0 => None,
        _ => Some(FieldError::OutOfRange {
            field: Field::InitialSupply,
            expected: "greater than 0",
        }),
    }
}

fn check_decimals(draft: &Draft) -> Option<FieldError> {
    let Some(decimals) = parse_number(draft.decimals()) else {
        return Some(FieldError::InvalidFormat {
            field: Field::Decimals,
            expected: "a number",
        });
    };
    if !(0.0..=MAX_DECIMALS).contains(&decimals) {
        return Some(FieldError::OutOfRange {
            field: Field::Decimals,
            expected: "between 0 and 18",
        });
    }
    None
}

fn check_supply_cap(draft: &Draft, supply: Option<f64>) -> Option<FieldError> {
    if draft.supply_cap().trim().is_empty() {
        return None;
    }
    let out_of_range = Some(FieldError::OutOfRange {
        field: Field::SupplyCap,
        expected: "greater than or equal to the initial supply",
    });
    // Non-numeric text fails the same check, as for the initial supply
    let Some(cap) = parse_number(draft.supply_cap()) else {
        return out_of_range;
    };
    match supply {
        Some(supply) if cap < supply => out_of_range,
        _ => None,
    }
}

/// Check every field of `draft` and collect the failures
pub fn validate(draft: &Draft) -> ValidationReport {
    let supply = parse_number(draft.initial_supply());
    let mut report = ValidationReport::default();

    let checks = [
        check_name(draft),
        check_symbol(draft),
        check_initial_supply(supply),
        check_decimals(draft),
        check_supply_cap(draft, supply),
    ];
    for error in checks.into_iter().flatten() {
        report.insert(error);
    }

    debug!(failing = report.len(), "Validated draft");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn valid_draft() -> Draft {
        let mut draft = Draft::new();
        draft.set_name("MyToken");
        draft.set_symbol("MTK");
        draft.set_initial_supply("1000");
        draft
    }

    fn kind_of(report: &ValidationReport, field: Field) -> Option<ErrorKind> {
        report.get(field).map(FieldError::kind)
    }

    #[test]
    fn test_valid_draft() {
        assert!(validate(&valid_draft()).is_valid());
    }

    #[test]
    fn test_empty_draft_reports_every_required_field() {
        let report = validate(&Draft::new());
        assert_eq!(kind_of(&report, Field::Name), Some(ErrorKind::Required));
        assert_eq!(kind_of(&report, Field::Symbol), Some(ErrorKind::Required));
        assert_eq!(
            kind_of(&report, Field::InitialSupply),
            Some(ErrorKind::OutOfRange)
        );
        // Default decimals and empty cap are fine
        assert!(!report.contains(Field::Decimals));
        assert!(!report.contains(Field::SupplyCap));
        assert_eq!(report.len(), 3);
    }

    #[test]
    fn test_whitespace_name_is_required() {
        let mut draft = valid_draft();
        draft.set_name("   ");
        assert_eq!(
            kind_of(&validate(&draft), Field::Name),
            Some(ErrorKind::Required)
        );
    }

    #[test]
    fn test_symbol_rules() {
        assert!(is_valid_symbol("ABC123"));
        assert!(is_valid_symbol("A"));
        assert!(is_valid_symbol("ABCDEFGH"));
        assert!(!is_valid_symbol("ABCDEFGHI"));
        assert!(!is_valid_symbol("abc"));
        assert!(!is_valid_symbol("MY-TOKEN"));
        assert!(!is_valid_symbol(" MTK"));
        assert!(!is_valid_symbol("ÄBC"));
        assert!(!is_valid_symbol(""));
    }

    #[test]
    fn test_decimals_bounds() {
        let cases = [
            ("19", Some(ErrorKind::OutOfRange)),
            ("18", None),
            ("0", None),
            ("-1", Some(ErrorKind::OutOfRange)),
            ("", Some(ErrorKind::InvalidFormat)),
            ("six", Some(ErrorKind::InvalidFormat)),
        ];
        for (decimals, expected) in cases {
            let mut draft = valid_draft();
            draft.set_decimals(decimals);
            assert_eq!(
                kind_of(&validate(&draft), Field::Decimals),
                expected,
                "decimals = {:?}",
                decimals
            );
        }
    }

    #[test]
    fn test_initial_supply_must_be_positive() {
        for supply in ["0", "-5", "", "lots"] {
            let mut draft = valid_draft();
            draft.set_initial_supply(supply);
            assert_eq!(
                kind_of(&validate(&draft), Field::InitialSupply),
                Some(ErrorKind::OutOfRange),
                "supply = {:?}",
                supply
            );
        }
    }

    #[test]
    fn test_supply_cap_against_initial_supply() {
        let mut draft = valid_draft();
        draft.set_initial_supply("100");

        draft.set_supply_cap("50");
        assert_eq!(
            kind_of(&validate(&draft), Field::SupplyCap),
            Some(ErrorKind::OutOfRange)
        );

        draft.set_supply_cap("200");
        assert!(validate(&draft).is_valid());

        draft.set_supply_cap("100");
        assert!(validate(&draft).is_valid());

        draft.set_supply_cap("");
        assert!(validate(&draft).is_valid());
    }

    #[test]
    fn test_non_numeric_supply_cap() {
        let mut draft = valid_draft();
        draft.set_initial_supply("100");
        for cap in ["abc", "unbounded", "inf"] {
            draft.set_supply_cap(cap);
            let report = validate(&draft);
            assert_eq!(
                kind_of(&report, Field::SupplyCap),
                Some(ErrorKind::OutOfRange),
                "cap = {:?}",
                cap
            );
            assert_eq!(report.len(), 1);
        }
    }

    #[test]
    fn test_cap_not_compared_when_supply_invalid() {
        let mut draft = valid_draft();
        draft.set_initial_supply("");
        draft.set_supply_cap("10");
        let report = validate(&draft);
        assert!(report.contains(Field::InitialSupply));
        assert!(!report.contains(Field::SupplyCap));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 42 "), Some(42.0));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("0.5"), Some(0.5));
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_report_serializes_by_field() {
        let report = validate(&Draft::new());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["name"]["kind"], "required");
        assert_eq!(json["name"]["message"], "Token name is required");
        assert_eq!(json["initial_supply"]["kind"], "out_of_range");
    }
}
