//! Response DTOs.

use serde::{Deserialize, Serialize};

use actordesk_core::types::pagination::PageResponse;
use actordesk_entity::Actor;
use actordesk_entity::actor::TIMESTAMP_FORMAT;

/// Standard response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
    /// Explanation when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    /// Creates a response that still carries data but reports a failure.
    pub fn degraded(data: T, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data,
            message: Some(message.into()),
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T: Serialize> {
    /// Items in this page.
    pub items: Vec<T>,
    /// Total item count.
    pub total: u64,
    /// Current page.
    pub page: u64,
    /// Items per page.
    pub per_page: u64,
    /// Total pages.
    pub total_pages: u64,
}

impl<T: Serialize> From<PageResponse<T>> for PaginatedResponse<T> {
    fn from(page: PageResponse<T>) -> Self {
        Self {
            items: page.items,
            total: page.total_items,
            page: page.page,
            per_page: page.page_size,
            total_pages: page.total_pages,
        }
    }
}

/// Actor as returned by the JSON API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorResponse {
    pub actor_id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Formatted as `dd.mm.YYYY HH:MM:SS`.
    pub last_update: String,
}

impl From<Actor> for ActorResponse {
    fn from(actor: Actor) -> Self {
        Self {
            actor_id: actor.actor_id.into_inner(),
            last_update: actor.last_update.format(TIMESTAMP_FORMAT).to_string(),
            first_name: actor.first_name,
            last_name: actor.last_name,
        }
    }
}

/// Basic health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
}

/// Detailed health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Database status.
    pub database: String,
    /// Round-trip time of the database check.
    pub database_latency_ms: Option<u64>,
    /// Number of actors, when the database answered.
    pub actor_count: Option<u64>,
}
