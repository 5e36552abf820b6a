//! The complete shift plan: lookup tables plus the ordered shift records.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::shift::{ShiftRecord, ShiftType};
use super::{LeadId, SectorId, ShiftId, WorkerId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftLead {
    pub id: LeadId,
    pub name: String,
    /// Phone number or other contact line shown under the lead's name.
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub id: SectorId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
}

/// Lookup tables resolving typed identifiers to display data.
///
/// Resolution is total: an unknown identifier renders as its `#<id>` label so
/// that a dangling reference is visible instead of silently dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Directory {
    #[serde(default)]
    pub leads: BTreeMap<LeadId, ShiftLead>,
    #[serde(default)]
    pub sectors: BTreeMap<SectorId, Sector>,
    #[serde(default)]
    pub workers: BTreeMap<WorkerId, Worker>,
}

impl Directory {
    pub fn add_lead(&mut self, lead: ShiftLead) {
        self.leads.insert(lead.id, lead);
    }

    pub fn add_sector(&mut self, sector: Sector) {
        self.sectors.insert(sector.id, sector);
    }

    pub fn add_worker(&mut self, worker: Worker) {
        self.workers.insert(worker.id, worker);
    }

    pub fn lead(&self, id: LeadId) -> Option<&ShiftLead> {
        self.leads.get(&id)
    }

    pub fn sector(&self, id: SectorId) -> Option<&Sector> {
        self.sectors.get(&id)
    }

    pub fn worker(&self, id: WorkerId) -> Option<&Worker> {
        self.workers.get(&id)
    }

    pub fn lead_name(&self, id: LeadId) -> String {
        self.lead(id)
            .map(|l| l.name.clone())
            .unwrap_or_else(|| id.unresolved_label())
    }

    pub fn lead_contact(&self, id: LeadId) -> String {
        self.lead(id).map(|l| l.contact.clone()).unwrap_or_default()
    }

    pub fn sector_name(&self, id: SectorId) -> String {
        self.sector(id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| id.unresolved_label())
    }

    pub fn worker_name(&self, id: WorkerId) -> String {
        self.worker(id)
            .map(|w| w.name.clone())
            .unwrap_or_else(|| id.unresolved_label())
    }
}

/// The whole dataset the views are projected from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftPlan {
    #[serde(default)]
    pub directory: Directory,
    #[serde(default)]
    pub shifts: Vec<ShiftRecord>,
}

impl ShiftPlan {
    pub fn new(directory: Directory, mut shifts: Vec<ShiftRecord>) -> Self {
        shifts.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        Self { directory, shifts }
    }

    /// Distinct shift name + window pairs, ordered by window start then name.
    pub fn shift_types(&self) -> Vec<ShiftType> {
        let mut seen = HashSet::new();
        let mut types: Vec<ShiftType> = self
            .shifts
            .iter()
            .map(ShiftRecord::shift_type)
            .filter(|t| seen.insert(t.clone()))
            .collect();
        types.sort_by(|a, b| {
            (a.window.start, &a.name, a.window.end).cmp(&(b.window.start, &b.name, b.window.end))
        });
        types
    }

    /// `(date, name)` keys that occur more than once, in plan order.
    pub fn duplicate_keys(&self) -> Vec<(NaiveDate, String)> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for shift in &self.shifts {
            let key = (shift.date, shift.name.clone());
            if !seen.insert(key.clone()) && !duplicates.contains(&key) {
                duplicates.push(key);
            }
        }
        duplicates
    }

    /// Shift ids carried by more than one shift, in plan order.
    pub fn duplicate_ids(&self) -> Vec<ShiftId> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for shift in &self.shifts {
            if !seen.insert(shift.id) && !duplicates.contains(&shift.id) {
                duplicates.push(shift.id);
            }
        }
        duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeWindow;

    fn record(id: i64, day: u32, name: &str, start: u32, end: u32) -> ShiftRecord {
        ShiftRecord {
            id: ShiftId::new(id),
            date: NaiveDate::from_ymd_opt(2025, 5, day).unwrap(),
            name: name.to_string(),
            window: TimeWindow::from_hm((start, 0), (end, 0)).unwrap(),
            lead: LeadId::new(1),
            sectors: vec![],
            equipment: vec![],
            notes: String::new(),
        }
    }

    #[test]
    fn test_unknown_ids_render_as_labels() {
        let directory = Directory::default();
        assert_eq!(directory.worker_name(WorkerId::new(17)), "#17");
        assert_eq!(directory.sector_name(SectorId::new(3)), "#3");
        assert_eq!(directory.lead_contact(LeadId::new(1)), "");
    }

    #[test]
    fn test_plan_sorts_shifts() {
        let plan = ShiftPlan::new(
            Directory::default(),
            vec![
                record(1, 2, "Spätschicht", 14, 22),
                record(2, 1, "Spätschicht", 14, 22),
                record(3, 1, "Frühschicht", 6, 14),
            ],
        );
        let ids: Vec<i64> = plan.shifts.iter().map(|s| s.id.value()).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_shift_types_are_distinct_and_ordered() {
        let plan = ShiftPlan::new(
            Directory::default(),
            vec![
                record(1, 1, "Spätschicht", 14, 22),
                record(2, 1, "Frühschicht", 6, 14),
                record(3, 2, "Frühschicht", 6, 14),
            ],
        );
        let names: Vec<String> = plan.shift_types().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Frühschicht", "Spätschicht"]);
    }

    #[test]
    fn test_duplicate_keys() {
        let plan = ShiftPlan::new(
            Directory::default(),
            vec![
                record(1, 1, "Frühschicht", 6, 14),
                record(2, 1, "Frühschicht", 6, 14),
                record(3, 1, "Frühschicht", 7, 15),
            ],
        );
        let dupes = plan.duplicate_keys();
        assert_eq!(dupes.len(), 1);
        assert_eq!(dupes[0].1, "Frühschicht");
    }

    #[test]
    fn test_duplicate_ids() {
        let plan = ShiftPlan::new(
            Directory::default(),
            vec![
                record(7, 1, "Frühschicht", 6, 14),
                record(7, 2, "Frühschicht", 6, 14),
                record(8, 2, "Spätschicht", 14, 22),
            ],
        );
        assert_eq!(plan.duplicate_ids(), vec![ShiftId::new(7)]);
        assert!(plan.duplicate_keys().is_empty());
    }
}
