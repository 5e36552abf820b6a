//! # Shift Board Backend
//!
//! Read-only scheduling views over a construction-crew shift plan.
//!
//! The plan (shifts, their sector assignments, tasks, workers and equipment)
//! is loaded once and projected into four page-shaped datasets: a month grid,
//! a week roster, a day breakdown and a single-shift detail page. A filter
//! state (date, shift lead, sector) parameterizes the queries the projectors
//! run against the store.
//!
//! ## Architecture
//!
//! - [`models`]: Entities, typed identifiers and German calendar labels
//! - [`db`]: Repository trait, in-memory store, sample data, factory
//! - [`services`]: View projectors, filter state and integrity checks
//! - [`routes`]: Serializable view types per page
//! - [`api`]: Re-exports of the types returned over HTTP
//! - [`config`]: Server configuration
//! - [`http`]: Axum-based HTTP server and request handlers

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
