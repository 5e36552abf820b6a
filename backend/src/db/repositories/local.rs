//! In-memory local repository implementation.
//!
//! The plan is loaded once (from the built-in sample or a JSON snapshot) and
//! served read-only. Suitable for local development, the demo server and tests.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info};
use parking_lot::RwLock;

use crate::db::repository::*;
use crate::db::sample::sample_plan;
use crate::models::{Directory, Sector, ShiftLead, ShiftPlan, ShiftRecord, ShiftType};

/// In-memory local repository.
///
/// # Example
/// ```
/// use shiftboard::db::repositories::LocalRepository;
///
/// let repo = LocalRepository::with_sample_data();
/// assert_eq!(repo.shift_count(), 28);
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    plan: ShiftPlan,
    // Connection health
    is_healthy: bool,
}

impl LocalRepository {
    /// Create a repository with an empty plan.
    pub fn new() -> Self {
        Self::from_parts(ShiftPlan::default())
    }

    /// Create a repository serving the built-in May 2025 sample plan.
    pub fn with_sample_data() -> Self {
        Self::from_parts(sample_plan())
    }

    /// Create a repository serving `plan`.
    ///
    /// # Returns
    /// * `Err(RepositoryError::ValidationError)` - If a `(date, shift name)`
    ///   pair or a shift id occurs more than once, or a worker's hours are
    ///   negative or not finite
    pub fn from_plan(plan: ShiftPlan) -> RepositoryResult<Self> {
        ensure_unique_keys(&plan)?;
        ensure_unique_ids(&plan)?;
        ensure_valid_hours(&plan)?;
        let plan = ShiftPlan::new(plan.directory, plan.shifts);
        info!(
            "Loaded shift plan: {} shifts, {} leads, {} sectors, {} workers",
            plan.shifts.len(),
            plan.directory.leads.len(),
            plan.directory.sectors.len(),
            plan.directory.workers.len()
        );
        Ok(Self::from_parts(plan))
    }

    /// Load a plan snapshot from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration_with_context(
                format!("Failed to read plan snapshot: {}", e),
                ErrorContext::new("load_plan").with_entity_id(path.display()),
            )
        })?;
        let plan: ShiftPlan = serde_json::from_str(&content)
            .map_err(|e| RepositoryError::from(e).with_operation("load_plan"))?;
        Self::from_plan(plan)
    }

    fn from_parts(plan: ShiftPlan) -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData {
                plan,
                is_healthy: true,
            })),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Get the number of shifts stored.
    pub fn shift_count(&self) -> usize {
        self.data.read().plan.shifts.len()
    }

    fn check_health(&self, operation: &str) -> RepositoryResult<()> {
        if self.data.read().is_healthy {
            Ok(())
        } else {
            Err(RepositoryError::internal("Local repository marked unhealthy")
                .with_operation(operation))
        }
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_unique_keys(plan: &ShiftPlan) -> RepositoryResult<()> {
    let duplicates = plan.duplicate_keys();
    if duplicates.is_empty() {
        return Ok(());
    }
    let keys: Vec<String> = duplicates
        .iter()
        .map(|(date, name)| format!("{}/{}", date, name))
        .collect();
    Err(RepositoryError::validation_with_context(
        "Shift (date, name) pairs must be unique",
        ErrorContext::new("load_plan")
            .with_entity("shift")
            .with_details(keys.join(", ")),
    ))
}

fn ensure_unique_ids(plan: &ShiftPlan) -> RepositoryResult<()> {
    let duplicates = plan.duplicate_ids();
    if duplicates.is_empty() {
        return Ok(());
    }
    let ids: Vec<String> = duplicates.iter().map(|id| id.to_string()).collect();
    Err(RepositoryError::validation_with_context(
        "Shift ids must be unique",
        ErrorContext::new("load_plan")
            .with_entity("shift")
            .with_details(ids.join(", ")),
    ))
}

fn ensure_valid_hours(plan: &ShiftPlan) -> RepositoryResult<()> {
    for shift in &plan.shifts {
        if let Some((_, assignment)) = shift
            .workers_with_sector()
            .find(|(_, w)| !w.has_valid_hours())
        {
            return Err(RepositoryError::validation_with_context(
                format!("Hours worked must be a non-negative number, got {}", assignment.hours),
                ErrorContext::new("load_plan")
                    .with_entity("shift")
                    .with_entity_id(shift.id)
                    .with_details(format!(
                        "{}/{} worker {}",
                        shift.date, shift.name, assignment.worker
                    )),
            ));
        }
    }
    Ok(())
}

#[async_trait]
impl ShiftRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn get_shifts_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepositoryResult<Vec<ShiftRecord>> {
        self.query_shifts(&ShiftQuery::range(start, end)).await
    }

    async fn get_shift(&self, date: NaiveDate, shift_name: &str) -> RepositoryResult<ShiftRecord> {
        self.check_health("get_shift")?;
        let data = self.data.read();
        data.plan
            .shifts
            .iter()
            .find(|s| s.date == date && s.name == shift_name)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("No shift '{}' on {}", shift_name, date),
                    ErrorContext::new("get_shift")
                        .with_entity("shift")
                        .with_entity_id(format!("{}/{}", date, shift_name)),
                )
            })
    }

    async fn query_shifts(&self, query: &ShiftQuery) -> RepositoryResult<Vec<ShiftRecord>> {
        self.check_health("query_shifts")?;
        let data = self.data.read();
        // Shifts are kept sorted, so filtering preserves the listing order.
        let shifts: Vec<ShiftRecord> = data
            .plan
            .shifts
            .iter()
            .filter_map(|s| query.apply(s))
            .collect();
        debug!(
            "query_shifts {}..={} lead={} sector={} -> {} shifts",
            query.start,
            query.end,
            query.lead,
            query.sector,
            shifts.len()
        );
        Ok(shifts)
    }

    async fn list_leads(&self) -> RepositoryResult<Vec<ShiftLead>> {
        self.check_health("list_leads")?;
        Ok(self.data.read().plan.directory.leads.values().cloned().collect())
    }

    async fn list_sectors(&self) -> RepositoryResult<Vec<Sector>> {
        self.check_health("list_sectors")?;
        Ok(self
            .data
            .read()
            .plan
            .directory
            .sectors
            .values()
            .cloned()
            .collect())
    }

    async fn list_shift_types(&self) -> RepositoryResult<Vec<ShiftType>> {
        self.check_health("list_shift_types")?;
        Ok(self.data.read().plan.shift_types())
    }

    async fn directory(&self) -> RepositoryResult<Directory> {
        self.check_health("directory")?;
        Ok(self.data.read().plan.directory.clone())
    }
}
