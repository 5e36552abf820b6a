//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the actual projection.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Datelike, Local, NaiveDate};

use super::dto::{
    DayQuery, HealthResponse, MonthQuery, NavigationQuery, RangeQuery, ShiftDetailQuery,
    ShiftListResponse, WeekQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{
    DayViewData, FilterOptions, IntegrityReport, MonthViewData, NavEntry, ShiftDetailPage,
    WeekViewData,
};
use crate::db::services as db_services;
use crate::models::{Sector, ShiftLead, ShiftType};
use crate::routes::navigation::navigation;
use crate::services::{self, WeekWindow};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is readable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "ok".to_string(),
        Ok(false) => "unavailable".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository: repo_status,
    }))
}

// =============================================================================
// Page Chrome
// =============================================================================

/// GET /v1/navigation?path=
pub async fn get_navigation(Query(query): Query<NavigationQuery>) -> HandlerResult<Vec<NavEntry>> {
    Ok(Json(navigation(query.path.as_deref().unwrap_or_default())))
}

/// GET /v1/filters
pub async fn get_filter_options(State(state): State<AppState>) -> HandlerResult<FilterOptions> {
    let options = services::get_filter_options(state.repository.as_ref(), today()).await?;
    Ok(Json(options))
}

// =============================================================================
// Views
// =============================================================================

/// GET /v1/monatsansicht?year=&month=&lead=&sector=
pub async fn get_month_view(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> HandlerResult<MonthViewData> {
    let today = today();
    let filter = query.filter_params().to_state(today)?;
    let year = query.year.unwrap_or(today.year());
    let month = query.month.unwrap_or(today.month());

    let data = services::get_month_view(state.repository.as_ref(), year, month, &filter).await?;
    Ok(Json(data))
}

/// GET /v1/wochenansicht?year=&week=&lead=&sector=
///
/// `year` and `week` are the ISO week-numbering year and week.
pub async fn get_week_view(
    State(state): State<AppState>,
    Query(query): Query<WeekQuery>,
) -> HandlerResult<WeekViewData> {
    let today = today();
    let filter = query.filter_params().to_state(today)?;
    let current = WeekWindow::containing(today).map_err(services::ViewError::from)?;
    let year = query.year.unwrap_or(current.iso_year);
    let week = query.week.unwrap_or(current.week);

    let data = services::get_week_view(state.repository.as_ref(), year, week, &filter).await?;
    Ok(Json(data))
}

/// GET /v1/tagesansicht?date=&lead=&sector=
pub async fn get_day_view(
    State(state): State<AppState>,
    Query(query): Query<DayQuery>,
) -> HandlerResult<DayViewData> {
    let filter = query
        .filter_params()
        .to_state(query.date.unwrap_or_else(today))?;

    let data = services::get_day_view(state.repository.as_ref(), &filter).await?;
    Ok(Json(data))
}

/// GET /v1/schichtdetails?date=&shift=
///
/// A shift that does not exist yields the `missing` page, not a 404.
pub async fn get_shift_detail(
    State(state): State<AppState>,
    Query(query): Query<ShiftDetailQuery>,
) -> HandlerResult<ShiftDetailPage> {
    let date = query
        .date
        .ok_or_else(|| AppError::BadRequest("Missing 'date' parameter".to_string()))?;
    let shift = query
        .shift
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing 'shift' parameter".to_string()))?;

    let page = services::get_shift_detail(state.repository.as_ref(), date, &shift).await?;
    Ok(Json(page))
}

// =============================================================================
// Query Interface
// =============================================================================

/// GET /v1/shifts?start=&end=&lead=&sector=
pub async fn list_shifts(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> HandlerResult<ShiftListResponse> {
    let (start, end) = match (query.start, query.end) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            return Err(AppError::BadRequest(
                "Both 'start' and 'end' are required".to_string(),
            ))
        }
    };
    if end < start {
        return Err(AppError::BadRequest(format!(
            "Range end {} is before start {}",
            end, start
        )));
    }

    let shift_query = query.filter_params().to_state(start)?.to_query(start, end);
    let shifts = db_services::query_shifts(state.repository.as_ref(), &shift_query).await?;
    let total = shifts.len();
    Ok(Json(ShiftListResponse { shifts, total }))
}

/// GET /v1/leads
pub async fn list_leads(State(state): State<AppState>) -> HandlerResult<Vec<ShiftLead>> {
    Ok(Json(db_services::list_leads(state.repository.as_ref()).await?))
}

/// GET /v1/sectors
pub async fn list_sectors(State(state): State<AppState>) -> HandlerResult<Vec<Sector>> {
    Ok(Json(db_services::list_sectors(state.repository.as_ref()).await?))
}

/// GET /v1/shift-types
pub async fn list_shift_types(State(state): State<AppState>) -> HandlerResult<Vec<ShiftType>> {
    Ok(Json(
        db_services::list_shift_types(state.repository.as_ref()).await?,
    ))
}

/// GET /v1/integrity
pub async fn get_integrity_report(State(state): State<AppState>) -> HandlerResult<IntegrityReport> {
    let report = services::get_integrity_report(state.repository.as_ref()).await?;
    Ok(Json(report))
}
