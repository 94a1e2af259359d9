use std::num::{ParseFloatError, ParseIntError};

use crate::domain::{NameError, Provision};

/// Parses one store line into a provision.
///
/// `line` is the 1-based line number in the backing file, used for error
/// reporting only.
///
/// # Errors
///
/// Returns a [`MalformedRecord`] describing the first problem found in the
/// line.
pub fn parse(input: &str, line: usize) -> Result<Provision, MalformedRecord> {
    let mut fields = input.splitn(3, ',');

    // `splitn` always yields at least one element.
    let name = fields.next().unwrap_or_default();
    let quantity = fields
        .next()
        .ok_or(MalformedRecord::MissingField { line })?;
    let unit_cost = fields
        .next()
        .ok_or(MalformedRecord::MissingField { line })?;

    let quantity: i64 =
        quantity
            .parse()
            .map_err(|source| MalformedRecord::Quantity {
                line,
                value: quantity.to_string(),
                source,
            })?;

    let unit_cost: f64 = unit_cost
        .parse()
        .map_err(|source| MalformedRecord::Cost {
            line,
            value: unit_cost.to_string(),
            source,
        })?;

    Provision::new(name, quantity, unit_cost)
        .map_err(|source| MalformedRecord::Name { line, source })
}

/// Encodes a provision as one store line, without a trailing newline.
///
/// The field order `name,quantity,unitCost` is fixed; [`parse`] reverses
/// this exactly.
#[must_use]
pub fn format(provision: &Provision) -> String {
    format!(
        "{},{},{}",
        provision.name(),
        provision.quantity(),
        provision.unit_cost()
    )
}

/// A store line that could not be parsed as a provision record.
#[derive(Debug, thiserror::Error)]
pub enum MalformedRecord {
    /// The line did not contain three comma-separated fields.
    #[error("line {line}: expected 'name,quantity,unitCost'")]
    MissingField {
        /// 1-based line number in the backing file.
        line: usize,
    },
    /// The name field was empty.
    #[error("line {line}: {source}")]
    Name {
        /// 1-based line number in the backing file.
        line: usize,
        /// The underlying name validation failure.
        source: NameError,
    },
    /// The quantity field was not a base-10 integer.
    #[error("line {line}: invalid quantity '{value}'")]
    Quantity {
        /// 1-based line number in the backing file.
        line: usize,
        /// The offending field content.
        value: String,
        /// The underlying parse failure.
        source: ParseIntError,
    },
    /// The unit cost field was not a decimal number.
    #[error("line {line}: invalid unit cost '{value}'")]
    Cost {
        /// 1-based line number in the backing file.
        line: usize,
        /// The offending field content.
        value: String,
        /// The underlying parse failure.
        source: ParseFloatError,
    },
}

impl MalformedRecord {
    /// The 1-based line number the error was found on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::MissingField { line }
            | Self::Name { line, .. }
            | Self::Quantity { line, .. }
            | Self::Cost { line, .. } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_well_formed_line() {
        let provision = parse("Flour,5,2.5", 1).unwrap();
        assert_eq!(provision.name(), "Flour");
        assert_eq!(provision.quantity(), 5);
        assert!((provision.unit_cost() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn preserves_spaces_in_names() {
        let provision = parse("Olive Oil,1,8.99", 1).unwrap();
        assert_eq!(provision.name(), "Olive Oil");
    }

    #[test]
    fn rejects_a_line_with_missing_fields() {
        let error = parse("Flour,5", 3).unwrap_err();
        assert!(matches!(error, MalformedRecord::MissingField { line: 3 }));
    }

    #[test]
    fn rejects_a_non_numeric_quantity() {
        let error = parse("Flour,five,2.5", 7).unwrap_err();
        assert_eq!(error.line(), 7);
        assert!(matches!(error, MalformedRecord::Quantity { .. }));
    }

    #[test]
    fn rejects_a_non_numeric_cost() {
        let error = parse("Flour,5,cheap", 2).unwrap_err();
        assert!(matches!(error, MalformedRecord::Cost { .. }));
    }

    #[test]
    fn rejects_an_empty_name() {
        let error = parse(",5,2.5", 1).unwrap_err();
        assert!(matches!(
            error,
            MalformedRecord::Name {
                source: NameError::Empty,
                ..
            }
        ));
    }

    #[test]
    fn formats_in_fixed_field_order() {
        let provision = Provision::new("Flour", 5, 2.5).unwrap();
        assert_eq!(format(&provision), "Flour,5,2.5");
    }

    #[test]
    fn whole_number_costs_format_without_a_decimal_point() {
        // Matches the store files written by earlier versions of the tool.
        let provision = Provision::new("Rice", 3, 2.0).unwrap();
        assert_eq!(format(&provision), "Rice,3,2");
    }

    #[test]
    fn format_then_parse_round_trips() {
        let provision = Provision::new("Olive Oil", 2, 8.99).unwrap();
        assert_eq!(parse(&format(&provision), 1).unwrap(), provision);
    }
}
