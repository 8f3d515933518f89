//! Typed identifiers for organizational entities
//!
//! Plain i64 newtypes over BIGSERIAL database keys. The distinct types keep a
//! zone id from being passed where a chapter id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
            Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self).map_err(|_| IdParseError)
            }
        }
    };
}

entity_id!(
    /// Identifier of a member (an identity that can hold role assignments)
    MemberId
);
entity_id!(
    /// Identifier of a chapter (base organizational unit)
    ChapterId
);
entity_id!(
    /// Identifier of a zone (regional grouping of chapters)
    ZoneId
);
entity_id!(
    /// Identifier of a live role assignment row
    AssignmentId
);

/// Error when parsing an id from a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid id format")]
pub struct IdParseError;
