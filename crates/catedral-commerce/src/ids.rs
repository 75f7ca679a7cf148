//! Newtype IDs for type-safe identifiers.
//!
//! Catalog products and venues carry the integer ids they were published
//! with; cart entries get ids allocated by the cart that owns them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Macro to generate numeric newtype ID structs.
macro_rules! define_id {
    ($name:ident, $inner:ty, $prefix:literal) => {
        /// A unique identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name($inner);

        impl $name {
            /// Create a new ID from its raw value.
            pub const fn new(id: $inner) -> Self {
                Self(id)
            }

            /// Get the raw value.
            pub const fn get(&self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }

        impl From<$inner> for $name {
            fn from(id: $inner) -> Self {
                Self(id)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            /// Accepts both the bare number and the displayed form.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($prefix).unwrap_or(s);
                s.parse::<$inner>().map(Self)
            }
        }
    };
}

define_id!(ProductId, u32, "");
define_id!(FieldId, u32, "");
define_id!(CartEntryId, u64, "#");

impl CartEntryId {
    /// The id following this one.
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new(7);
        assert_eq!(id.get(), 7);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(ProductId::new(12).to_string(), "12");
        assert_eq!(CartEntryId::new(3).to_string(), "#3");
    }

    #[test]
    fn test_id_parse() {
        assert_eq!("16".parse::<ProductId>().unwrap(), ProductId::new(16));
        assert_eq!("#4".parse::<CartEntryId>().unwrap(), CartEntryId::new(4));
        assert_eq!(" 4 ".parse::<CartEntryId>().unwrap(), CartEntryId::new(4));
        assert!("abc".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_entry_id_sequence() {
        let id = CartEntryId::new(1);
        assert_eq!(id.next(), CartEntryId::new(2));
    }

    #[test]
    fn test_id_serializes_as_number() {
        let json = serde_json::to_string(&ProductId::new(5)).unwrap();
        assert_eq!(json, "5");
    }
}
