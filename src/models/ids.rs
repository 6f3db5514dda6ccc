//! Strongly-typed ID wrappers for all entity types
//!
//! Ids are integers assigned by their repository in increasing order.
//! Newtype wrappers keep an expense id from being passed where a rule id
//! is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw id value
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Get the raw id value
            pub const fn value(&self) -> u64 {
                self.0
            }

            /// The id that follows this one
            pub const fn next(&self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(ExpenseId, "exp-");
define_id!(RuleId, "rec-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(ExpenseId::new(7).to_string(), "exp-7");
        assert_eq!(RuleId::new(12).to_string(), "rec-12");
    }

    #[test]
    fn test_id_parse_with_and_without_prefix() {
        assert_eq!("exp-42".parse::<ExpenseId>().unwrap(), ExpenseId::new(42));
        assert_eq!("42".parse::<ExpenseId>().unwrap(), ExpenseId::new(42));
        assert!("rec-x".parse::<RuleId>().is_err());
    }

    #[test]
    fn test_next_is_monotonic() {
        let id = ExpenseId::new(1);
        assert!(id.next() > id);
        assert_eq!(id.next().value(), 2);
    }

    #[test]
    fn test_id_serialization() {
        let id = RuleId::new(3);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "3");
        let deserialized: RuleId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
