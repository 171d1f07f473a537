//! # Todo Rust Backend
//!
//! Rust backend for the todo application.
//!
//! This crate provides a small REST API for managing to-do items, backed by a
//! pluggable persistence layer. The API is exposed via Axum for the
//! JavaScript frontend.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: The `Todo` entity and its identifier type
//! - [`db`]: Repository pattern, storage backends, and persistence layer
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Storage Backends
//!
//! Backends are selected with cargo features:
//!
//! - `local-repo` (default): in-memory repository for tests and local development
//! - `postgres-repo`: PostgreSQL with Diesel ORM and connection pooling

pub mod db;
pub mod models;

#[cfg(feature = "http-server")]
pub mod http;
