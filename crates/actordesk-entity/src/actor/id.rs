//! Actor primary key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use actordesk_core::AppError;

/// Primary key of the `actor` table.
///
/// Wrapping the raw integer keeps row identifiers from being confused with
/// page numbers and sizes, which are also integers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct ActorId(pub i32);

impl ActorId {
    /// Return the inner integer value.
    pub fn into_inner(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ActorId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl FromStr for ActorId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i32>()
            .map(Self)
            .map_err(|_| AppError::validation(format!("Invalid actor id: '{s}'")))
    }
}
