//! Data Transfer Objects for the HTTP API.
//!
//! Query-string structs for each endpoint plus the few response bodies that
//! are not view types. View types are re-exported from the routes module
//! since they already derive Serialize/Deserialize.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Day
    DayShiftTable, DayViewData, DayWorkerRow,
    // Filters
    FilterOption, FilterOptions,
    // Integrity
    IntegrityIssue, IntegrityReport, IssueKind,
    // Month
    MonthDayCell, MonthViewData, MonthWeekRow, ShiftSummary,
    // Navigation
    NavEntry,
    // Shift detail
    EquipmentRow, SectorPanel, ShiftDetailPage, ShiftDetailView, ShiftHeader, TaskRow,
    WorkerCard,
    // Week
    WeekCell, WeekShiftRow, WeekViewData,
};

use super::error::AppError;
use crate::db::repository::{LeadFilter, SectorFilter};
use crate::models::ShiftRecord;
use crate::services::FilterState;

/// `lead` and `sector` tokens: `all` (or absent) or a numeric id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterParams {
    #[serde(default)]
    pub lead: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
}

impl FilterParams {
    /// Filter state for `date` with the parsed lead and sector selection.
    pub fn to_state(&self, date: NaiveDate) -> Result<FilterState, AppError> {
        let lead: LeadFilter = self.lead.as_deref().unwrap_or_default().parse()?;
        let sector: SectorFilter = self.sector.as_deref().unwrap_or_default().parse()?;
        Ok(FilterState::new(date).with_lead(lead).with_sector(sector))
    }
}

/// Query parameters for the month view; defaults to the current month.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthQuery {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub lead: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
}

/// Query parameters for the week view (ISO year and week); defaults to the
/// current week.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeekQuery {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub week: Option<u32>,
    #[serde(default)]
    pub lead: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
}

/// Query parameters for the day view; defaults to today.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayQuery {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub lead: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
}

/// Query parameters for the shift detail page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShiftDetailQuery {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Shift name, e.g. `Frühschicht`
    #[serde(default)]
    pub shift: Option<String>,
}

/// Inclusive date range for the raw shift listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RangeQuery {
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub lead: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavigationQuery {
    #[serde(default)]
    pub path: Option<String>,
}

macro_rules! filter_params {
    ($($query:ty),*) => {
        $(
            impl $query {
                pub fn filter_params(&self) -> FilterParams {
                    FilterParams {
                        lead: self.lead.clone(),
                        sector: self.sector.clone(),
                    }
                }
            }
        )*
    };
}

filter_params!(MonthQuery, WeekQuery, DayQuery, RangeQuery);

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Shift store status
    pub repository: String,
}

/// Raw shift listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftListResponse {
    pub shifts: Vec<ShiftRecord>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeadId, SectorId};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
    }

    #[test]
    fn test_absent_params_are_sentinels() {
        let state = FilterParams::default().to_state(date()).unwrap();
        assert_eq!(state, FilterState::new(date()));
    }

    #[test]
    fn test_numeric_params() {
        let params = FilterParams {
            lead: Some("2".to_string()),
            sector: Some("ALL".to_string()),
        };
        let state = params.to_state(date()).unwrap();
        assert_eq!(state.lead, LeadFilter::Lead(LeadId(2)));
        assert_eq!(state.sector, SectorFilter::All);

        let params = FilterParams {
            lead: None,
            sector: Some("1".to_string()),
        };
        assert_eq!(
            params.to_state(date()).unwrap().sector,
            SectorFilter::Sector(SectorId(1))
        );
    }

    #[test]
    fn test_invalid_param() {
        let params = FilterParams {
            lead: Some("Thomas".to_string()),
            sector: None,
        };
        assert!(matches!(params.to_state(date()), Err(AppError::BadRequest(_))));
    }
}
