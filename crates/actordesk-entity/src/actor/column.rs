//! Columns of the `actor` table, in display order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use actordesk_core::AppError;
use actordesk_core::types::sorting::SortColumn;

/// A column of the `actor` table.
///
/// The declaration order is the fixed column order used by every view and
/// export: ID, First name, Last name, Last update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorColumn {
    /// `actor_id`
    ActorId,
    /// `first_name`
    FirstName,
    /// `last_name`
    LastName,
    /// `last_update`
    LastUpdate,
}

impl ActorColumn {
    /// All columns in display order.
    pub const ALL: [ActorColumn; 4] = [
        Self::ActorId,
        Self::FirstName,
        Self::LastName,
        Self::LastUpdate,
    ];

    /// Query-string key and SQL column name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ActorId => "actor_id",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::LastUpdate => "last_update",
        }
    }

    /// Human-readable column title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::ActorId => "ID",
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::LastUpdate => "Last update",
        }
    }

    /// Titles of all columns in display order.
    pub fn titles() -> Vec<&'static str> {
        Self::ALL.iter().map(ActorColumn::title).collect()
    }

    /// Whether the column can be changed through the edit form.
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::FirstName | Self::LastName)
    }
}

impl SortColumn for ActorColumn {
    const DEFAULT: Self = Self::ActorId;

    fn from_key(key: &str) -> Option<Self> {
        key.parse().ok()
    }

    fn key(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for ActorColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActorColumn {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| AppError::validation(format!("Unknown actor column: '{s}'")))
    }
}
