//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The [`Todo`](crate::models::Todo) entity serializes directly as the
//! response body for all CRUD endpoints.

use serde::{Deserialize, Serialize};

/// Request body for creating a new todo.
///
/// Only `text` is read; any id/completed/createdAt fields in the body are
/// ignored and overwritten by the server.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreateTodoRequest {
    /// Item description; missing or null becomes the empty string
    #[serde(default)]
    pub text: Option<String>,
}

/// Request body for updating an existing todo.
///
/// `text` and `completed` are copied onto the stored record; id and
/// createdAt are never touched by an update.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateTodoRequest {
    /// New item description; missing or null becomes the empty string
    #[serde(default)]
    pub text: Option<String>,
    /// New completion flag
    #[serde(default)]
    pub completed: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Database connection status
    pub database: String,
}
