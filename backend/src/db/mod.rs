//! Data access for the shift plan.
//!
//! This module provides the read-only query interface the views are projected
//! from, via the Repository pattern.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, projectors)               │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs)                            │
//! │  - Logging, not-found to placeholder translation        │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Query Interface       │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────▼──────────────────────────────┐
//!     │             Local Repository                  │
//!     │   (in-memory; sample plan or JSON snapshot)   │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! ```ignore
//! use shiftboard::db::{services, DataSource, RepositoryFactory};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = RepositoryFactory::create(&DataSource::from_env())?;
//!     let sectors = services::list_sectors(repo.as_ref()).await?;
//!     Ok(())
//! }
//! ```

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod sample;
pub mod services;

pub use factory::{DataSource, RepositoryFactory};
pub use repo_config::RepositoryConfig;
pub use repositories::LocalRepository;
pub use repository::{
    ErrorContext, LeadFilter, RepositoryError, RepositoryResult, SectorFilter, ShiftQuery,
    ShiftRepository,
};
pub use services::{
    find_shift, get_shift, get_shifts_by_date_range, health_check, list_leads, list_sectors,
    list_shift_types, query_shifts,
};
