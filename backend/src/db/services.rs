//! High-level repository service layer.
//!
//! Repository-agnostic lookups used by the HTTP handlers. These wrap the
//! [`ShiftRepository`] trait with logging and translate a missing shift into
//! `None` so views can render a placeholder instead of failing.
//!
//! # Usage
//!
//! ```no_run
//! use shiftboard::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::with_sample_data();
//!     let leads = services::list_leads(&repo).await?;
//!     println!("Found {} shift leads", leads.len());
//!     Ok(())
//! }
//! ```

use chrono::NaiveDate;
use log::{debug, warn};

use super::repository::{RepositoryResult, ShiftQuery, ShiftRepository};
use crate::models::{Directory, Sector, ShiftLead, ShiftRecord, ShiftType};

// ==================== Health ====================

/// Check if the backing store is healthy.
pub async fn health_check<R: ShiftRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Shift Lookups ====================

/// Shifts in the inclusive range `start..=end`.
pub async fn get_shifts_by_date_range<R: ShiftRepository + ?Sized>(
    repo: &R,
    start: NaiveDate,
    end: NaiveDate,
) -> RepositoryResult<Vec<ShiftRecord>> {
    if end < start {
        warn!("Inverted date range {}..={} yields no shifts", start, end);
    }
    repo.get_shifts_by_date_range(start, end).await
}

/// Shifts matching a full query.
pub async fn query_shifts<R: ShiftRepository + ?Sized>(
    repo: &R,
    query: &ShiftQuery,
) -> RepositoryResult<Vec<ShiftRecord>> {
    repo.query_shifts(query).await
}

/// The shift identified by `(date, shift_name)`; errors if it does not exist.
pub async fn get_shift<R: ShiftRepository + ?Sized>(
    repo: &R,
    date: NaiveDate,
    shift_name: &str,
) -> RepositoryResult<ShiftRecord> {
    repo.get_shift(date, shift_name).await
}

/// Like [`get_shift`], but a missing shift is `Ok(None)`.
pub async fn find_shift<R: ShiftRepository + ?Sized>(
    repo: &R,
    date: NaiveDate,
    shift_name: &str,
) -> RepositoryResult<Option<ShiftRecord>> {
    match repo.get_shift(date, shift_name).await {
        Ok(shift) => Ok(Some(shift)),
        Err(e) if e.is_not_found() => {
            debug!("No shift '{}' on {}", shift_name, date);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

// ==================== Reference Data ====================

pub async fn list_leads<R: ShiftRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<ShiftLead>> {
    repo.list_leads().await
}

pub async fn list_sectors<R: ShiftRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<Sector>> {
    repo.list_sectors().await
}

pub async fn list_shift_types<R: ShiftRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<ShiftType>> {
    repo.list_shift_types().await
}

pub async fn directory<R: ShiftRepository + ?Sized>(repo: &R) -> RepositoryResult<Directory> {
    repo.directory().await
}
