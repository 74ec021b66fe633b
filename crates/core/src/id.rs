//! Strongly-typed identifiers used across the domain.
//!
//! Ids are numeric and unique within their own collection (users, products,
//! categories, branches, orders). New ids are assigned by the store as
//! `max(existing) + 1`, starting at 1.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

macro_rules! impl_numeric_id {
    ($t:ident, $name:literal) => {
        #[derive(
            Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $t(u32);

        impl $t {
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            pub const fn as_u32(&self) -> u32 {
                self.0
            }

            /// Successor id, used for sequential id assignment.
            pub const fn next(&self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u32> for $t {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u32 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw: u32 = s
                    .parse()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(raw))
            }
        }
    };
}

impl_numeric_id!(UserId, "UserId");
impl_numeric_id!(ProductId, "ProductId");
impl_numeric_id!(CategoryId, "CategoryId");
impl_numeric_id!(BranchId, "BranchId");
impl_numeric_id!(OrderId, "OrderId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_from_path_segments() {
        let id: ProductId = "7".parse().unwrap();
        assert_eq!(id, ProductId::new(7));
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        let err = "abc".parse::<OrderId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn next_increments() {
        assert_eq!(OrderId::new(41).next(), OrderId::new(42));
    }
}
