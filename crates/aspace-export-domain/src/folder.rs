//! Folder expression module - expansion of `indicator_2` values
//!
//! A physical instance's secondary indicator encodes one or more
//! folder/item numbers in a handful of informal notations inherited from
//! finding-aid data entry: a single value ("7"), an inclusive hyphen
//! range ("7-9"), an ampersand list ("7 & 9"), or nothing at all.
//! Expansion turns one expression into one [`FolderItem`] per encoded
//! number.

use crate::row::{FolderItem, Row};
use std::fmt;

/// Errors from parsing a folder/item expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderExpressionError {
    /// A range or list token did not parse as an integer
    NonNumeric {
        /// The offending token, trimmed
        token: String,
    },

    /// A range's lower bound exceeds its upper bound
    ReversedRange {
        /// Lower bound as written
        lower: u32,
        /// Upper bound as written
        upper: u32,
    },

    /// A hyphenated expression with other than two bounds (e.g. "1-2-3")
    MalformedRange {
        /// The full expression as written
        raw: String,
    },
}

impl fmt::Display for FolderExpressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolderExpressionError::NonNumeric { token } => {
                write!(f, "non-numeric folder number token: {:?}", token)
            }
            FolderExpressionError::ReversedRange { lower, upper } => {
                write!(f, "reversed folder number range: {}-{}", lower, upper)
            }
            FolderExpressionError::MalformedRange { raw } => {
                write!(f, "malformed folder number range: {:?}", raw)
            }
        }
    }
}

impl std::error::Error for FolderExpressionError {}

/// Parsed form of an instance's folder/item expression
///
/// Parsing checks one delimiter at a time: hyphen first, then ampersand.
/// An expression containing both is therefore treated as a range, which
/// fails on its non-numeric bound. That precedence is inherited from the
/// source data conventions and is deliberately not reinterpreted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderExpression {
    /// No expression on the instance
    Absent,

    /// A single value, carried through verbatim
    Single(String),

    /// An inclusive range of folder numbers (lower, upper)
    Range(u32, u32),

    /// An explicit list of folder numbers, in written order
    List(Vec<u32>),
}

impl FolderExpression {
    /// Parse a raw `indicator_2` value
    ///
    /// `None` and the empty string both parse as [`FolderExpression::Absent`].
    ///
    /// # Examples
    ///
    /// ```
    /// use aspace_export_domain::FolderExpression;
    ///
    /// let expr = FolderExpression::parse(Some("7-9")).unwrap();
    /// assert_eq!(expr, FolderExpression::Range(7, 9));
    /// ```
    pub fn parse(raw: Option<&str>) -> Result<Self, FolderExpressionError> {
        let raw = match raw {
            Some(s) if !s.is_empty() => s,
            _ => return Ok(FolderExpression::Absent),
        };

        if raw.contains('-') {
            let bounds: Vec<u32> = raw
                .split('-')
                .map(parse_number)
                .collect::<Result<_, _>>()?;
            match bounds.as_slice() {
                [lower, upper] if lower <= upper => Ok(FolderExpression::Range(*lower, *upper)),
                [lower, upper] => Err(FolderExpressionError::ReversedRange {
                    lower: *lower,
                    upper: *upper,
                }),
                _ => Err(FolderExpressionError::MalformedRange {
                    raw: raw.to_string(),
                }),
            }
        } else if raw.contains('&') {
            let numbers: Vec<u32> = raw
                .split('&')
                .map(parse_number)
                .collect::<Result<_, _>>()?;
            Ok(FolderExpression::List(numbers))
        } else {
            Ok(FolderExpression::Single(raw.to_string()))
        }
    }

    /// Expand into one [`FolderItem`] per encoded folder/item number
    ///
    /// The result is finite and carries no hidden state; expanding twice
    /// yields the same sequence. Ranges expand in ascending order, lists
    /// in written order, and `Absent`/`Single` expand to exactly one item.
    pub fn expand(&self) -> Vec<FolderItem> {
        match self {
            FolderExpression::Absent => vec![FolderItem::Absent],
            FolderExpression::Single(s) => vec![FolderItem::Text(s.clone())],
            FolderExpression::Range(lower, upper) => {
                (*lower..=*upper).map(FolderItem::Number).collect()
            }
            FolderExpression::List(numbers) => {
                numbers.iter().copied().map(FolderItem::Number).collect()
            }
        }
    }
}

fn parse_number(token: &str) -> Result<u32, FolderExpressionError> {
    let trimmed = token.trim();
    trimmed
        .parse()
        .map_err(|_| FolderExpressionError::NonNumeric {
            token: trimmed.to_string(),
        })
}

/// Expand one instance into output rows
///
/// Every emitted row carries the instance's resolved box number and the
/// owning archival object's title; the number of rows equals the number
/// of folder/item numbers encoded in `indicator_2` (one for a single or
/// absent value).
pub fn expand_instance(
    box_number: &str,
    indicator_2: Option<&str>,
    title: &str,
) -> Result<Vec<Row>, FolderExpressionError> {
    let expression = FolderExpression::parse(indicator_2)?;
    Ok(expression
        .expand()
        .into_iter()
        .map(|item| Row::new(box_number, item, title))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_expression() {
        assert_eq!(
            FolderExpression::parse(None).unwrap(),
            FolderExpression::Absent
        );
        assert_eq!(
            FolderExpression::parse(Some("")).unwrap(),
            FolderExpression::Absent
        );
    }

    #[test]
    fn test_single_value_kept_verbatim() {
        let expr = FolderExpression::parse(Some("12a")).unwrap();
        assert_eq!(expr, FolderExpression::Single("12a".to_string()));
        assert_eq!(expr.expand(), vec![FolderItem::Text("12a".to_string())]);
    }

    #[test]
    fn test_range_expansion() {
        let expr = FolderExpression::parse(Some("7-9")).unwrap();
        assert_eq!(
            expr.expand(),
            vec![
                FolderItem::Number(7),
                FolderItem::Number(8),
                FolderItem::Number(9)
            ]
        );
    }

    #[test]
    fn test_range_with_whitespace() {
        let expr = FolderExpression::parse(Some("7 - 9")).unwrap();
        assert_eq!(expr, FolderExpression::Range(7, 9));
    }

    #[test]
    fn test_degenerate_range() {
        let expr = FolderExpression::parse(Some("4-4")).unwrap();
        assert_eq!(expr.expand(), vec![FolderItem::Number(4)]);
    }

    #[test]
    fn test_list_expansion() {
        let expr = FolderExpression::parse(Some("7 & 9")).unwrap();
        assert_eq!(
            expr.expand(),
            vec![FolderItem::Number(7), FolderItem::Number(9)]
        );
    }

    #[test]
    fn test_list_preserves_written_order() {
        let expr = FolderExpression::parse(Some("9 & 3 & 5")).unwrap();
        assert_eq!(expr, FolderExpression::List(vec![9, 3, 5]));
    }

    #[test]
    fn test_hyphen_checked_before_ampersand() {
        // Mixed expressions hit the range branch first, then fail on the
        // non-numeric bound. Inherited precedence, preserved as-is.
        let err = FolderExpression::parse(Some("7 & 9-11")).unwrap_err();
        assert_eq!(
            err,
            FolderExpressionError::NonNumeric {
                token: "7 & 9".to_string()
            }
        );
    }

    #[test]
    fn test_reversed_range_fails() {
        let err = FolderExpression::parse(Some("9-7")).unwrap_err();
        assert_eq!(err, FolderExpressionError::ReversedRange { lower: 9, upper: 7 });
    }

    #[test]
    fn test_non_numeric_range_bound_fails() {
        let err = FolderExpression::parse(Some("7-x")).unwrap_err();
        assert_eq!(
            err,
            FolderExpressionError::NonNumeric {
                token: "x".to_string()
            }
        );
    }

    #[test]
    fn test_non_numeric_list_entry_fails() {
        let err = FolderExpression::parse(Some("7 & oversize")).unwrap_err();
        assert_eq!(
            err,
            FolderExpressionError::NonNumeric {
                token: "oversize".to_string()
            }
        );
    }

    #[test]
    fn test_extra_hyphens_fail() {
        let err = FolderExpression::parse(Some("1-2-3")).unwrap_err();
        assert_eq!(
            err,
            FolderExpressionError::MalformedRange {
                raw: "1-2-3".to_string()
            }
        );
    }

    #[test]
    fn test_instance_range_scenario() {
        let rows = expand_instance("12", Some("7-9"), "Letters").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], Row::new("12", FolderItem::Number(7), "Letters"));
        assert_eq!(rows[1], Row::new("12", FolderItem::Number(8), "Letters"));
        assert_eq!(rows[2], Row::new("12", FolderItem::Number(9), "Letters"));
    }

    #[test]
    fn test_instance_list_scenario() {
        let rows = expand_instance("4", Some("3 & 5"), "Photos").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], Row::new("4", FolderItem::Number(3), "Photos"));
        assert_eq!(rows[1], Row::new("4", FolderItem::Number(5), "Photos"));
    }

    #[test]
    fn test_instance_absent_scenario() {
        let rows = expand_instance("1", None, "Misc").unwrap();
        assert_eq!(rows, vec![Row::new("1", FolderItem::Absent, "Misc")]);
    }

    #[test]
    fn test_expansion_is_restartable() {
        let expr = FolderExpression::parse(Some("2-4")).unwrap();
        assert_eq!(expr.expand(), expr.expand());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn range_expands_to_inclusive_count(lower in 0u32..500, span in 0u32..200) {
                let upper = lower + span;
                let expr = FolderExpression::parse(Some(&format!("{}-{}", lower, upper))).unwrap();
                let items = expr.expand();
                prop_assert_eq!(items.len() as u32, span + 1);
                for (offset, item) in items.iter().enumerate() {
                    prop_assert_eq!(item, &FolderItem::Number(lower + offset as u32));
                }
            }

            #[test]
            fn list_expands_in_written_order(numbers in proptest::collection::vec(0u32..1000, 2..8)) {
                let raw = numbers
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(" & ");
                let expr = FolderExpression::parse(Some(&raw)).unwrap();
                let expected: Vec<FolderItem> =
                    numbers.iter().copied().map(FolderItem::Number).collect();
                prop_assert_eq!(expr.expand(), expected);
            }
        }
    }
}
