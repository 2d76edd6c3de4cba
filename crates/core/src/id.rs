// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed UUID identifiers.
//!
//! Cycle, task, and brand identifiers are UUIDs assigned by the upstream
//! scheduler. They are parsed into distinct newtypes at the validation
//! boundary so a task id can never be passed where a cycle id is expected.

use thiserror::Error;

/// A string failed to parse as one of the typed identifiers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid {label}: `{value}` is not a UUID")]
pub struct ParseIdError {
    /// Human-readable identifier kind, e.g. `"task id"`.
    pub label: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Define a newtype ID wrapper around `uuid::Uuid`.
///
/// Generates `new()` for random v4 generation, `parse()` rejecting anything
/// that is not a UUID, `as_uuid()`, `Display`, `FromStr`, `From<Uuid>`, and
/// transparent serde implementations.
///
/// ```ignore
/// crate::define_uuid_id! {
///     /// Doc comment for the ID type.
///     pub struct TaskId("task id");
/// }
/// ```
#[macro_export]
macro_rules! define_uuid_id {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($label:literal);
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl $name {
            /// Human-readable identifier kind used in error messages.
            pub const LABEL: &'static str = $label;

            /// Generate a new random (v4) identifier.
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            /// Parse an identifier, rejecting anything that is not a UUID.
            pub fn parse(value: &str) -> Result<Self, $crate::id::ParseIdError> {
                uuid::Uuid::parse_str(value.trim()).map(Self).map_err(|_| {
                    $crate::id::ParseIdError { label: Self::LABEL, value: value.to_string() }
                })
            }

            /// The underlying UUID.
            pub fn as_uuid(&self) -> &uuid::Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::id::ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<uuid::Uuid> for $name {
            fn from(id: uuid::Uuid) -> Self {
                Self(id)
            }
        }
    };
}

crate::define_uuid_id! {
    /// Identifier of one optimization cycle grouping the tasks for a brand.
    pub struct CycleId("cycle id");
}

crate::define_uuid_id! {
    /// Identifier of one dispatched unit of work; primary key of its record.
    pub struct TaskId("task id");
}

crate::define_uuid_id! {
    /// Identifier of the brand the cycle is optimizing for.
    pub struct BrandId("brand id");
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
