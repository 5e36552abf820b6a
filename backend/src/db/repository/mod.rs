//! Repository trait definitions for shift plan access.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`query`]: Date range and lead/sector selection
//! - [`shift`]: The read-only query interface the views are projected from

pub mod error;
pub mod query;
pub mod shift;

// Re-export error types
pub use error::{ErrorContext, RepositoryError, RepositoryResult};

pub use query::{
    InvalidFilterValue, LeadFilter, SectorFilter, ShiftQuery, ALL_LEADS_LABEL, ALL_SECTORS_LABEL,
};
pub use shift::ShiftRepository;
