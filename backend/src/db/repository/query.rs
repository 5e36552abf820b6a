//! Query parameters for shift lookups.
//!
//! A [`ShiftQuery`] is what filter selections turn into. Lead and sector
//! selections each carry an explicit "all" sentinel.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{LeadId, SectorId, ShiftRecord};

pub const ALL_LEADS_LABEL: &str = "Alle Schichtleiter";
pub const ALL_SECTORS_LABEL: &str = "Alle Sektoren";

/// Query-string token selecting the "all" sentinel.
const ALL_TOKEN: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadFilter {
    #[default]
    All,
    Lead(LeadId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectorFilter {
    #[default]
    All,
    Sector(SectorId),
}

/// A filter token that is neither `all` nor a numeric identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid filter value '{0}': expected 'all' or a numeric id")]
pub struct InvalidFilterValue(pub String);

fn parse_token<T: FromStr>(s: &str) -> Result<Option<T>, InvalidFilterValue> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_TOKEN) {
        return Ok(None);
    }
    trimmed
        .parse::<T>()
        .map(Some)
        .map_err(|_| InvalidFilterValue(s.to_string()))
}

impl FromStr for LeadFilter {
    type Err = InvalidFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_token::<LeadId>(s)?.map_or(LeadFilter::All, LeadFilter::Lead))
    }
}

impl FromStr for SectorFilter {
    type Err = InvalidFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_token::<SectorId>(s)?.map_or(SectorFilter::All, SectorFilter::Sector))
    }
}

impl fmt::Display for LeadFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeadFilter::All => f.write_str(ALL_TOKEN),
            LeadFilter::Lead(id) => write!(f, "{}", id),
        }
    }
}

impl fmt::Display for SectorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectorFilter::All => f.write_str(ALL_TOKEN),
            SectorFilter::Sector(id) => write!(f, "{}", id),
        }
    }
}

impl LeadFilter {
    pub fn is_all(&self) -> bool {
        matches!(self, LeadFilter::All)
    }

    pub fn accepts(&self, lead: LeadId) -> bool {
        match self {
            LeadFilter::All => true,
            LeadFilter::Lead(id) => *id == lead,
        }
    }
}

impl SectorFilter {
    pub fn is_all(&self) -> bool {
        matches!(self, SectorFilter::All)
    }

    pub fn accepts(&self, sector: SectorId) -> bool {
        match self {
            SectorFilter::All => true,
            SectorFilter::Sector(id) => *id == sector,
        }
    }
}

/// Inclusive date range plus lead/sector selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default)]
    pub lead: LeadFilter,
    #[serde(default)]
    pub sector: SectorFilter,
}

impl ShiftQuery {
    pub fn range(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            lead: LeadFilter::All,
            sector: SectorFilter::All,
        }
    }

    pub fn single_day(date: NaiveDate) -> Self {
        Self::range(date, date)
    }

    pub fn with_lead(mut self, lead: LeadFilter) -> Self {
        self.lead = lead;
        self
    }

    pub fn with_sector(mut self, sector: SectorFilter) -> Self {
        self.sector = sector;
        self
    }

    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Apply the query to one record.
    ///
    /// This is the filtering policy every listing view runs through. The lead
    /// selection keeps or drops whole shifts. The sector selection keeps the
    /// shift but narrows its sector assignments and equipment to the selected
    /// sector, so a shift without that sector stays visible with zero workers.
    /// [`ShiftRepository::query_shifts`](super::ShiftRepository::query_shifts)
    /// delegates here by default; a backend that filters at the source must
    /// produce the same records.
    pub fn apply(&self, record: &ShiftRecord) -> Option<ShiftRecord> {
        if !self.covers(record.date) || !self.lead.accepts(record.lead) {
            return None;
        }
        if self.sector.is_all() {
            return Some(record.clone());
        }

        let mut narrowed = record.clone();
        narrowed.sectors.retain(|s| self.sector.accepts(s.sector));
        narrowed.equipment.retain(|e| self.sector.accepts(e.sector));
        Some(narrowed)
    }
}
