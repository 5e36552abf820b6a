//! Filter bar state.
//!
//! [`FilterState`] is an immutable value; every selection produces a new
//! value. [`FilterContext`] is the handle passed to whoever needs to read or
//! change the selection, and views consume the state through
//! [`FilterState::to_query`].

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::db::repository::{
    LeadFilter, RepositoryResult, SectorFilter, ShiftQuery, ShiftRepository, ALL_LEADS_LABEL,
    ALL_SECTORS_LABEL,
};
use crate::models::Directory;
use crate::routes::filter::{FilterOption, FilterOptions};

/// Selected date, lead and sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub date: NaiveDate,
    #[serde(default)]
    pub lead: LeadFilter,
    #[serde(default)]
    pub sector: SectorFilter,
}

/// One user selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Date(NaiveDate),
    Lead(LeadFilter),
    Sector(SectorFilter),
}

impl FilterState {
    /// `date` with both "all" sentinels.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            lead: LeadFilter::All,
            sector: SectorFilter::All,
        }
    }

    /// Today's date on the local clock with both "all" sentinels.
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn with_date(self, date: NaiveDate) -> Self {
        Self { date, ..self }
    }

    pub fn with_lead(self, lead: LeadFilter) -> Self {
        Self { lead, ..self }
    }

    pub fn with_sector(self, sector: SectorFilter) -> Self {
        Self { sector, ..self }
    }

    /// Replace exactly the selected field. The selected lead or sector is
    /// not checked against the plan.
    pub fn select(self, selection: Selection) -> Self {
        match selection {
            Selection::Date(date) => self.with_date(date),
            Selection::Lead(lead) => self.with_lead(lead),
            Selection::Sector(sector) => self.with_sector(sector),
        }
    }

    /// Query for `start..=end` under the current lead and sector selection.
    pub fn to_query(&self, start: NaiveDate, end: NaiveDate) -> ShiftQuery {
        ShiftQuery::range(start, end)
            .with_lead(self.lead)
            .with_sector(self.sector)
    }

    /// Query for the selected date only.
    pub fn day_query(&self) -> ShiftQuery {
        self.to_query(self.date, self.date)
    }

    pub fn lead_label(&self, directory: &Directory) -> String {
        match self.lead {
            LeadFilter::All => ALL_LEADS_LABEL.to_string(),
            LeadFilter::Lead(id) => directory.lead_name(id),
        }
    }

    pub fn sector_label(&self, directory: &Directory) -> String {
        match self.sector {
            SectorFilter::All => ALL_SECTORS_LABEL.to_string(),
            SectorFilter::Sector(id) => directory.sector_name(id),
        }
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::today()
    }
}

/// Shared handle to the current [`FilterState`].
///
/// Setters replace the whole value at once; subscribers see every change.
#[derive(Debug, Clone)]
pub struct FilterContext {
    sender: Arc<watch::Sender<FilterState>>,
}

impl FilterContext {
    pub fn new(initial: FilterState) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn current(&self) -> FilterState {
        *self.sender.borrow()
    }

    /// Apply a selection and return the new state.
    pub fn select(&self, selection: Selection) -> FilterState {
        self.sender.send_modify(|state| *state = state.select(selection));
        let state = self.current();
        debug!(
            "Filter changed: date={} lead={} sector={}",
            state.date, state.lead, state.sector
        );
        state
    }

    pub fn select_date(&self, date: NaiveDate) -> FilterState {
        self.select(Selection::Date(date))
    }

    pub fn select_lead(&self, lead: LeadFilter) -> FilterState {
        self.select(Selection::Lead(lead))
    }

    pub fn select_sector(&self, sector: SectorFilter) -> FilterState {
        self.select(Selection::Sector(sector))
    }

    /// Receiver notified after each selection.
    pub fn subscribe(&self) -> watch::Receiver<FilterState> {
        self.sender.subscribe()
    }
}

impl Default for FilterContext {
    fn default() -> Self {
        Self::new(FilterState::today())
    }
}

/// Picker options: the sentinel first, then every lead and sector in id order.
pub fn compute_filter_options(directory: &Directory, default_date: NaiveDate) -> FilterOptions {
    let all = |label: &str| FilterOption {
        value: LeadFilter::All.to_string(),
        label: label.to_string(),
    };

    let leads = std::iter::once(all(ALL_LEADS_LABEL))
        .chain(directory.leads.values().map(|lead| FilterOption {
            value: lead.id.to_string(),
            label: lead.name.clone(),
        }))
        .collect();

    let sectors = std::iter::once(all(ALL_SECTORS_LABEL))
        .chain(directory.sectors.values().map(|sector| FilterOption {
            value: sector.id.to_string(),
            label: sector.name.clone(),
        }))
        .collect();

    FilterOptions {
        default_date,
        leads,
        sectors,
    }
}

pub async fn get_filter_options<R: ShiftRepository + ?Sized>(
    repo: &R,
    default_date: NaiveDate,
) -> RepositoryResult<FilterOptions> {
    let directory = repo.directory().await?;
    Ok(compute_filter_options(&directory, default_date))
}
