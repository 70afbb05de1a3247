//! Quantity value object with normalized numeric comparison.
//!
//! The host platform is inconsistent about whether a line quantity arrives as
//! a number or as decimal text. `Quantity` normalizes at the boundary so key
//! comparison never depends on the original representation: `5`, `"5"` and
//! `"5.00"` are the same quantity.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DomainError, DomainResult};

/// A transaction line quantity, stored in normalized decimal form.
///
/// The inner decimal is normalized on construction (trailing zeros stripped),
/// so the derived `Eq` and `Hash` agree with numeric equality.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quantity(Decimal);

impl Quantity {
    pub fn new(value: Decimal) -> Self {
        Self(value.normalize())
    }

    /// Parse decimal text as produced by the host platform ("5", "5.0", "12.25").
    pub fn parse(text: &str) -> DomainResult<Self> {
        let trimmed = text.trim();
        let value = Decimal::from_str(trimmed)
            .map_err(|e| DomainError::validation(format!("quantity '{trimmed}': {e}")))?;
        Ok(Self::new(value))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Quantity {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self::new(Decimal::from(value))
    }
}

impl FromStr for Quantity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Decimal's deserializer accepts JSON numbers and decimal strings
        // alike, which covers both wire forms the host produces.
        let value = <Decimal as Deserialize>::deserialize(deserializer)?;
        Ok(Self::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn string_and_numeric_forms_are_equal() {
        assert_eq!(Quantity::parse("5").unwrap(), Quantity::from(5));
        assert_eq!(Quantity::parse("5.00").unwrap(), Quantity::from(5));
        assert_eq!(Quantity::parse(" 12.25 ").unwrap(), Quantity::parse("12.250").unwrap());
    }

    #[test]
    fn hashing_agrees_with_numeric_equality() {
        let mut set = HashSet::new();
        set.insert(Quantity::parse("5.0").unwrap());
        assert!(set.contains(&Quantity::from(5)));
    }

    #[test]
    fn malformed_text_is_a_validation_error() {
        let err = Quantity::parse("five").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn deserializes_from_number_and_string() {
        let from_number: Quantity = serde_json::from_str("5").unwrap();
        let from_string: Quantity = serde_json::from_str("\"5.0\"").unwrap();
        assert_eq!(from_number, from_string);
    }

    #[test]
    fn serializes_as_decimal_text() {
        let qty = Quantity::parse("5.50").unwrap();
        assert_eq!(serde_json::to_string(&qty).unwrap(), "\"5.5\"");
    }
}
