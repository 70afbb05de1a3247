//! Strongly-typed identifiers used across the domain.
//!
//! The host platform addresses items, locations, and transactions by opaque
//! internal ids. These newtypes keep the three id spaces from mixing; the
//! textual content is never interpreted, only compared.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

/// Identifier of an inventory location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(String);

/// Identifier of the transaction (a fulfillment or its source transaction)
/// whose inventory detail is being resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

macro_rules! impl_id_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a raw internal id. The id must be non-empty.
            pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
                let raw = raw.into();
                if raw.trim().is_empty() {
                    return Err(DomainError::invalid_id(concat!($name, " cannot be empty")));
                }
                Ok(Self(raw))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

impl_id_newtype!(ItemId, "ItemId");
impl_id_newtype!(LocationId, "LocationId");
impl_id_newtype!(TransactionId, "TransactionId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace_ids() {
        assert!(ItemId::new("").is_err());
        assert!(LocationId::new("   ").is_err());
        assert!(TransactionId::new("\t").is_err());
    }

    #[test]
    fn ids_compare_by_value() {
        let a = TransactionId::new("11296642").unwrap();
        let b: TransactionId = "11296642".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "11296642");
    }
}
