use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry of a single-select picker. `value` is `all` or the numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

/// Options for the filter bar; each list starts with its "all" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub default_date: NaiveDate,
    pub leads: Vec<FilterOption>,
    pub sectors: Vec<FilterOption>,
}

pub const GET_FILTER_OPTIONS: &str = "get_filter_options";
