//! Built-in sample plan for May 2025.
//!
//! Two crews (early and late shift) staff the north and south sectors during
//! the first two weeks of May. Some shifts exist but are unstaffed, and
//! nothing is planned after 14.05, so the month view shows both the
//! zero-staffing and the no-data state.

use chrono::NaiveDate;

use crate::models::{
    Directory, EquipmentAssignment, EquipmentId, LeadId, Sector, SectorAssignment, SectorId,
    ShiftId, ShiftLead, ShiftPlan, ShiftRecord, TaskItem, TaskStatus, TimeWindow, Worker,
    WorkerAssignment, WorkerId,
};

pub const EARLY_SHIFT: &str = "Frühschicht";
pub const LATE_SHIFT: &str = "Spätschicht";

pub const LEAD_THOMAS: LeadId = LeadId(1);
pub const LEAD_KLAUS: LeadId = LeadId(2);

pub const NORTH: SectorId = SectorId(1);
pub const SOUTH: SectorId = SectorId(2);
pub const EAST: SectorId = SectorId(3);
pub const WEST: SectorId = SectorId(4);

const EARLY_CREW: [(i64, &str, &str); 6] = [
    (1, "Lisa Schmidt", "Kranführer"),
    (2, "Michael Weber", "Maurer"),
    (3, "Anna Becker", "Elektriker"),
    (4, "Jan Hoffmann", "Maurer"),
    (5, "Sarah Koch", "Zimmerin"),
    (6, "Stefan Wolf", "Betonbauer"),
];

const LATE_CREW: [(i64, &str, &str); 5] = [
    (7, "Petra Schulz", "Kranführer"),
    (8, "Martin Fischer", "Maurer"),
    (9, "Sandra Bauer", "Elektriker"),
    (10, "Robert Krause", "Maurer"),
    (11, "Julia Neumann", "Baggerfahrerin"),
];

/// `(day of May, early headcount, late headcount)`
const STAFFING: [(u32, usize, usize); 14] = [
    (1, 4, 3),
    (2, 4, 4),
    (3, 6, 2),
    (4, 3, 5),
    (5, 2, 0),
    (6, 0, 0),
    (7, 0, 0),
    (8, 5, 4),
    (9, 6, 3),
    (10, 4, 4),
    (11, 5, 3),
    (12, 3, 0),
    (13, 0, 0),
    (14, 0, 0),
];

pub fn early_window() -> TimeWindow {
    TimeWindow::from_hm((6, 0), (14, 0)).unwrap_or_else(|| unreachable!("static window"))
}

pub fn late_window() -> TimeWindow {
    TimeWindow::from_hm((14, 0), (22, 0)).unwrap_or_else(|| unreachable!("static window"))
}

fn may(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, day).unwrap_or_else(|| unreachable!("static date"))
}

fn directory() -> Directory {
    let mut directory = Directory::default();
    directory.add_lead(ShiftLead {
        id: LEAD_THOMAS,
        name: "Thomas Müller".to_string(),
        contact: "+49 123 456789".to_string(),
    });
    directory.add_lead(ShiftLead {
        id: LEAD_KLAUS,
        name: "Klaus Wagner".to_string(),
        contact: "+49 123 987654".to_string(),
    });
    for (id, name) in [
        (NORTH, "Nordsektor"),
        (SOUTH, "Südsektor"),
        (EAST, "Ostsektor"),
        (WEST, "Westsektor"),
    ] {
        directory.add_sector(Sector {
            id,
            name: name.to_string(),
            description: String::new(),
        });
    }
    for (id, name, _) in EARLY_CREW.iter().chain(LATE_CREW.iter()) {
        directory.add_worker(Worker {
            id: WorkerId::new(*id),
            name: name.to_string(),
        });
    }
    directory
}

/// First `headcount` crew members, the first half (rounded up) in the north
/// sector and the rest in the south sector.
fn staffed_sectors(crew: &[(i64, &str, &str)], headcount: usize) -> Vec<SectorAssignment> {
    let staffed = &crew[..headcount.min(crew.len())];
    let north_len = staffed.len().div_ceil(2);
    let (north, south) = staffed.split_at(north_len);

    [(NORTH, north), (SOUTH, south)]
        .into_iter()
        .map(|(sector, members)| SectorAssignment {
            sector,
            tasks: vec![],
            workers: members
                .iter()
                .map(|(id, _, role)| WorkerAssignment {
                    worker: WorkerId::new(*id),
                    role: role.to_string(),
                    hours: 8.0,
                    notes: None,
                })
                .collect(),
        })
        .collect()
}

fn task(code: &str, description: &str, status: TaskStatus, assignee: i64) -> TaskItem {
    TaskItem {
        code: code.to_string(),
        description: description.to_string(),
        status,
        assignee: WorkerId::new(assignee),
    }
}

fn equipment(id: i64, name: &str, code: &str, sector: SectorId) -> EquipmentAssignment {
    EquipmentAssignment {
        id: EquipmentId::new(id),
        name: name.to_string(),
        code: code.to_string(),
        sector,
    }
}

/// The fully detailed early shift on 01.05.2025.
fn detailed_early_shift(id: ShiftId) -> ShiftRecord {
    let mut sectors = staffed_sectors(&EARLY_CREW, 4);
    sectors[0].tasks = vec![
        task("N1", "Fundament gießen", TaskStatus::InProgress, 1),
        task("N2", "Stahlträger montieren", TaskStatus::Planned, 2),
    ];
    sectors[0].workers[0].notes = Some("Kranführerschein erneuert".to_string());
    sectors[1].tasks = vec![
        task("S1", "Elektroinstallation", TaskStatus::InProgress, 3),
        task("S2", "Mauerwerk errichten", TaskStatus::Planned, 4),
    ];
    sectors[1].workers[0].notes = Some("Spezialist für Industrieverkabelung".to_string());

    ShiftRecord {
        id,
        date: may(1),
        name: EARLY_SHIFT.to_string(),
        window: early_window(),
        lead: LEAD_THOMAS,
        sectors,
        equipment: vec![
            equipment(1, "Bagger", "B-123", NORTH),
            equipment(2, "Kran", "K-456", NORTH),
            equipment(3, "Betonmischer", "BM-789", SOUTH),
        ],
        notes: "Wetterbericht: Sonnig, 18°C. Lieferung von Baumaterial um 10:00 Uhr erwartet."
            .to_string(),
    }
}

/// The sample plan served when no snapshot file is configured.
pub fn sample_plan() -> ShiftPlan {
    let mut shifts = Vec::with_capacity(STAFFING.len() * 2);
    let mut next_id = 1;
    let mut take_id = || {
        let id = ShiftId::new(next_id);
        next_id += 1;
        id
    };

    for (day, early, late) in STAFFING {
        let early_id = take_id();
        if day == 1 {
            shifts.push(detailed_early_shift(early_id));
        } else {
            shifts.push(ShiftRecord {
                id: early_id,
                date: may(day),
                name: EARLY_SHIFT.to_string(),
                window: early_window(),
                lead: LEAD_THOMAS,
                sectors: staffed_sectors(&EARLY_CREW, early),
                equipment: vec![],
                notes: String::new(),
            });
        }
        shifts.push(ShiftRecord {
            id: take_id(),
            date: may(day),
            name: LATE_SHIFT.to_string(),
            window: late_window(),
            lead: LEAD_KLAUS,
            sectors: staffed_sectors(&LATE_CREW, late),
            equipment: vec![],
            notes: String::new(),
        });
    }

    ShiftPlan::new(directory(), shifts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_plan_has_unique_keys() {
        let plan = sample_plan();
        assert_eq!(plan.shifts.len(), 28);
        assert!(plan.duplicate_keys().is_empty());
    }

    #[test]
    fn test_headcounts_follow_staffing_table() {
        let plan = sample_plan();
        for (day, early, late) in STAFFING {
            let on_day: Vec<_> = plan.shifts.iter().filter(|s| s.date == may(day)).collect();
            assert_eq!(on_day[0].name, EARLY_SHIFT);
            assert_eq!(on_day[0].worker_count(), early, "early shift on {}", day);
            assert_eq!(on_day[1].worker_count(), late, "late shift on {}", day);
        }
    }

    #[test]
    fn test_first_of_may_early_shift_is_detailed() {
        let plan = sample_plan();
        let shift = &plan.shifts[0];
        assert_eq!(shift.date, may(1));
        assert_eq!(shift.sectors[0].workers.len(), 2);
        assert_eq!(shift.sectors[1].workers.len(), 2);
        assert_eq!(shift.tasks_with_sector().count(), 4);
        assert_eq!(shift.equipment.len(), 3);
    }

    #[test]
    fn test_two_shift_types() {
        let types = sample_plan().shift_types();
        assert_eq!(types.len(), 2);
        assert_eq!(types[0].window, early_window());
        assert_eq!(types[1].window, late_window());
    }
}
