//! Service layer: the view projectors and the filter state they consume.
//!
//! Each view has a pure `compute_*` projector over already fetched shift
//! records and an async `get_*` function that builds the query from a
//! [`FilterState`], fetches through the repository and projects the result.

pub mod calendar;
pub mod day;
pub mod filter;
pub mod integrity;
pub mod month;
pub mod shift_detail;
pub mod week;

use crate::db::repository::RepositoryError;

pub use calendar::{CalendarError, MonthWindow, WeekWindow};
pub use day::{compute_day_view, get_day_view};
pub use filter::{
    compute_filter_options, get_filter_options, FilterContext, FilterState, Selection,
};
pub use integrity::{compute_integrity_report, get_integrity_report};
pub use month::{compute_month_view, get_month_view};
pub use shift_detail::{compute_shift_detail, compute_shift_detail_page, get_shift_detail};
pub use week::{compute_week_view, get_week_view};

/// Failure to build a view: a calendar window that does not exist, or a
/// failing store.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ViewResult<T> = Result<T, ViewError>;
