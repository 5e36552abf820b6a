use serde::{Deserialize, Serialize};

/// A link in the shared page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub path: String,
    pub label: String,
    pub active: bool,
}

/// `(path, label)` of the four views, in header order.
pub const NAV_ITEMS: [(&str, &str); 4] = [
    ("/monatsansicht", "Monatsansicht"),
    ("/wochenansicht", "Wochenansicht"),
    ("/tagesansicht", "Tagesansicht"),
    ("/schichtdetails", "Schichtdetails"),
];

/// Header entries with `active` set by exact path match.
pub fn navigation(current_path: &str) -> Vec<NavEntry> {
    NAV_ITEMS
        .iter()
        .map(|(path, label)| NavEntry {
            path: path.to_string(),
            label: label.to_string(),
            active: *path == current_path,
        })
        .collect()
}

pub const GET_NAVIGATION: &str = "get_navigation";
