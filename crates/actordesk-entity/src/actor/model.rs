//! Actor entity model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::column::ActorColumn;
use super::id::ActorId;

/// Display format for `last_update` in views and exports.
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Longest first or last name the `actor` table accepts, in characters.
pub const MAX_NAME_LENGTH: usize = 45;

/// A row of the `actor` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Actor {
    /// Unique, immutable identifier.
    pub actor_id: ActorId,
    /// Given name (at most 45 characters).
    pub first_name: String,
    /// Family name (at most 45 characters).
    pub last_name: String,
    /// When the row was last modified.
    pub last_update: NaiveDateTime,
}

impl Actor {
    /// Format a single column for display.
    pub fn display_value(&self, column: ActorColumn) -> String {
        match column {
            ActorColumn::ActorId => self.actor_id.to_string(),
            ActorColumn::FirstName => self.first_name.clone(),
            ActorColumn::LastName => self.last_name.clone(),
            ActorColumn::LastUpdate => self.last_update.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// All display values in [`ActorColumn::ALL`] order.
    pub fn display_values(&self) -> Vec<String> {
        ActorColumn::ALL
            .iter()
            .map(|column| self.display_value(*column))
            .collect()
    }
}
