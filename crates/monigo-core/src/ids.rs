//! Identifier types for Monigo resources.
//!
//! Identifiers are assigned by the Monigo API and are opaque to the client.
//! Each resource gets its own newtype so a `PlanId` can never be passed where a
//! `CustomerId` is expected.
//!
//! # Macro-based ID Types
//!
//! The `string_id_type!` macro reduces boilerplate for string identifiers,
//! ensuring consistent implementation of serialization, parsing, and display traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IdError;

/// Characters that would change the meaning of a URL path if interpolated.
const RESERVED: [char; 3] = ['/', '?', '#'];

/// Check that `value` can be used as a single URL path segment.
fn validate(value: &str) -> Result<(), IdError> {
    if value.trim().is_empty() {
        return Err(IdError::Empty);
    }
    if let Some(character) = value.chars().find(|c| RESERVED.contains(c)) {
        return Err(IdError::ReservedCharacter {
            value: value.to_string(),
            character,
        });
    }
    Ok(())
}

/// Macro to define a string identifier type with standard trait implementations.
///
/// This macro generates a newtype wrapper around `String` with implementations for:
/// - `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `Serialize`, `Deserialize` (transparent string)
/// - `FromStr`, `TryFrom<String>` (validated), `Display`, `Debug`
/// - `From<&str>` (unchecked, validated when used in a path)
/// - `Into<String>`, `AsRef<str>`
///
/// # Example
///
/// ```ignore
/// string_id_type!(MyId, "A custom identifier type.");
/// let id: MyId = "my-1".parse().unwrap();
/// ```
macro_rules! string_id_type {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier without validation.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Return the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Return the identifier as a URL path segment.
            ///
            /// # Errors
            ///
            /// Returns an error if the identifier is blank or contains `/`, `?` or `#`.
            pub fn path_segment(&self) -> Result<&str, IdError> {
                validate(&self.0)?;
                Ok(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                validate(s)?;
                Ok(Self(s.to_string()))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                validate(&value)?;
                Ok(Self(value))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id_type!(OrgId, "An organisation identifier.\n\nDerived server-side from the API key; never supplied by the client.");
string_id_type!(CustomerId, "A customer identifier assigned by Monigo.");
string_id_type!(MetricId, "A billing metric identifier.");
string_id_type!(PlanId, "A billing plan identifier.");
string_id_type!(PriceId, "A price identifier (a pricing rule attached to a plan).");
string_id_type!(SubscriptionId, "A subscription identifier.");
string_id_type!(PayoutAccountId, "A payout account identifier.");
string_id_type!(InvoiceId, "An invoice identifier.");
string_id_type!(LineItemId, "An invoice line item identifier.");
string_id_type!(RollupId, "A usage rollup identifier.");
string_id_type!(PortalTokenId, "A portal token identifier.");
string_id_type!(ReplayJobId, "An event replay job identifier.");
string_id_type!(
    IdempotencyKey,
    "A caller-supplied idempotency key.\n\nThe server uses it to de-duplicate repeated ingestion of the same logical event."
);

impl IdempotencyKey {
    /// Generate a new random idempotency key (UUID v4).
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}
