//! Read-only query interface over the shift plan.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::error::RepositoryResult;
use super::query::ShiftQuery;
use crate::models::{Directory, Sector, ShiftLead, ShiftRecord, ShiftType};

/// Repository trait for shift plan lookups.
///
/// Every view is projected from what this trait returns. There is no write
/// path: implementations load a plan once and serve it unchanged.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ShiftRepository: Send + Sync {
    /// Check that the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// All shifts with `start <= date <= end`, ordered by date, window start
    /// and name. An inverted range yields an empty list.
    async fn get_shifts_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepositoryResult<Vec<ShiftRecord>>;

    /// The shift identified by `(date, shift_name)`.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If no such shift exists
    async fn get_shift(&self, date: NaiveDate, shift_name: &str) -> RepositoryResult<ShiftRecord>;

    /// Shifts matching a full query (range plus lead/sector selection).
    ///
    /// Defaults to the range lookup followed by [`ShiftQuery::apply`].
    async fn query_shifts(&self, query: &ShiftQuery) -> RepositoryResult<Vec<ShiftRecord>> {
        let shifts = self.get_shifts_by_date_range(query.start, query.end).await?;
        Ok(shifts.iter().filter_map(|s| query.apply(s)).collect())
    }

    /// All known shift leads, ordered by id.
    async fn list_leads(&self) -> RepositoryResult<Vec<ShiftLead>>;

    /// All known sectors, ordered by id.
    async fn list_sectors(&self) -> RepositoryResult<Vec<Sector>>;

    /// Distinct shift name + window pairs found in the plan.
    async fn list_shift_types(&self) -> RepositoryResult<Vec<ShiftType>>;

    /// Snapshot of the lookup tables used to resolve identifiers.
    async fn directory(&self) -> RepositoryResult<Directory>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use crate::db::repository::{LeadFilter, SectorFilter};
    use crate::db::sample::{LEAD_THOMAS, SOUTH};

    /// Store that only provides range lookups and relies on the default query.
    struct RangeOnly(LocalRepository);

    #[async_trait]
    impl ShiftRepository for RangeOnly {
        async fn health_check(&self) -> RepositoryResult<bool> {
            self.0.health_check().await
        }

        async fn get_shifts_by_date_range(
            &self,
            start: NaiveDate,
            end: NaiveDate,
        ) -> RepositoryResult<Vec<ShiftRecord>> {
            self.0.get_shifts_by_date_range(start, end).await
        }

        async fn get_shift(&self, date: NaiveDate, shift_name: &str) -> RepositoryResult<ShiftRecord> {
            self.0.get_shift(date, shift_name).await
        }

        async fn list_leads(&self) -> RepositoryResult<Vec<ShiftLead>> {
            self.0.list_leads().await
        }

        async fn list_sectors(&self) -> RepositoryResult<Vec<Sector>> {
            self.0.list_sectors().await
        }

        async fn list_shift_types(&self) -> RepositoryResult<Vec<ShiftType>> {
            self.0.list_shift_types().await
        }

        async fn directory(&self) -> RepositoryResult<Directory> {
            self.0.directory().await
        }
    }

    #[tokio::test]
    async fn test_default_query_matches_local_filtering() {
        let local = LocalRepository::with_sample_data();
        let range_only = RangeOnly(local.clone());
        let start = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 5, 31).unwrap();

        let queries = [
            ShiftQuery::range(start, end),
            ShiftQuery::range(start, end).with_lead(LeadFilter::Lead(LEAD_THOMAS)),
            ShiftQuery::range(start, end).with_sector(SectorFilter::Sector(SOUTH)),
        ];
        for query in &queries {
            assert_eq!(
                range_only.query_shifts(query).await.unwrap(),
                local.query_shifts(query).await.unwrap()
            );
        }
    }
}
