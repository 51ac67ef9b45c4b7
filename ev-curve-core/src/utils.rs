//! Module containing the range-checked parsing helpers used for every numeric input.

use std::fmt;

use crate::imports::*;

/// A range of values `[min, max]`, optionally excluding `min`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValRange {
    /// Lower value
    pub min: f64,
    /// Upper value
    pub max: f64,
    /// Whether `min` itself is excluded from the range
    pub min_exclusive: bool,
}

impl ValRange {
    /// Closed range `[min, max]`
    pub const fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_exclusive: false,
        }
    }

    /// Half-open range `(min, max]`
    pub const fn above(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_exclusive: true,
        }
    }

    /// Is the value contained in the [ValRange]?  NaN never is.
    pub fn in_range(&self, val: f64) -> bool {
        let above_min = if self.min_exclusive {
            val > self.min
        } else {
            val >= self.min
        };
        above_min && val <= self.max
    }
}

impl fmt::Display for ValRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min_exclusive {
            write!(f, "greater than {} and at most {}", self.min, self.max)
        } else {
            write!(f, "between {} and {}", self.min, self.max)
        }
    }
}

/// A named numeric input together with its valid domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Command line flag name, without leading dashes
    pub name: &'static str,
    pub range: ValRange,
}

impl FieldSpec {
    pub const fn new(name: &'static str, range: ValRange) -> Self {
        Self { name, range }
    }

    /// Returns `val` unchanged if it lies within the field's range.
    pub fn check(&self, val: f64) -> Result<f64, InputError> {
        if self.range.in_range(val) {
            Ok(val)
        } else {
            Err(InputError::OutOfRange {
                field: self.name,
                value: val,
                range: self.range,
            })
        }
    }

    /// Like [FieldSpec::check], passing `None` through.
    pub fn check_opt(&self, val: Option<f64>) -> Result<Option<f64>, InputError> {
        val.map(|v| self.check(v)).transpose()
    }

    /// Parses `text` as a number and checks it against the field's range.
    pub fn parse(&self, text: &str) -> Result<f64, InputError> {
        let val: f64 = text.trim().parse().map_err(|_| InputError::NotANumber {
            field: self.name,
            text: text.to_string(),
        })?;
        self.check(val)
    }

    /// Returns a parse-and-validate closure for this field, e.g. for use as a
    /// `clap` value parser.
    pub fn parser(
        self,
    ) -> impl Fn(&str) -> Result<f64, InputError> + Clone + Send + Sync + 'static {
        move |text: &str| self.parse(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::*;

    #[test]
    fn test_closed_range_includes_bounds() {
        let range = ValRange::new(200., 80_000.);
        assert!(range.in_range(200.));
        assert!(range.in_range(80_000.));
        assert!(!range.in_range(199.99));
        assert!(!range.in_range(80_000.01));
        assert!(!range.in_range(f64::NAN));
    }

    #[test]
    fn test_open_lower_bound() {
        assert!(!DRIVETRAIN_EFF.range.in_range(0.0));
        assert!(DRIVETRAIN_EFF.range.in_range(1e-6));
        assert!(DRIVETRAIN_EFF.range.in_range(1.0));
        assert!(!DRIVETRAIN_EFF.range.in_range(1.01));
    }

    #[test]
    fn test_parse() {
        assert_eq!(WEIGHT.parse("1800").unwrap(), 1800.);
        assert_eq!(WEIGHT.parse(" 1800.5 ").unwrap(), 1800.5);

        let err = WEIGHT.parse("100").unwrap_err();
        assert!(matches!(err, InputError::OutOfRange { field: "weight", .. }));
        assert_eq!(
            err.to_string(),
            "--weight = 100 is out of range, value must be between 200 and 80000"
        );

        let err = WEIGHT.parse("heavy").unwrap_err();
        assert_eq!(
            err,
            InputError::NotANumber {
                field: "weight",
                text: "heavy".into()
            }
        );
    }

    #[test]
    fn test_parser_closure() {
        let parse_speed = MAX_SPEED.parser();
        assert_eq!(parse_speed("120").unwrap(), 120.);
        assert!(parse_speed("10").is_err());
    }
}
