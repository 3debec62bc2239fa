//! # thermohub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **thermostat REST API**
//!   (`GET /thermostats`, `GET /thermostats/{id}`, `PATCH /thermostats/{id}`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses: 4-space pretty-printed JSON
//!   on success, plain text on error
//!
//! ## Dependency rule
//! Depends on `thermohub-app` (for port traits and services) and
//! `thermohub-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod response;
pub mod router;
pub mod state;
