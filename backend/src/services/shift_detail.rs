//! Shift detail projector.
//!
//! The sector, task, worker and equipment tabs are all derived from one
//! [`ShiftRecord`]. The flat task and worker lists are flattened from the
//! sector panels, so the tabs cannot disagree.

use chrono::NaiveDate;

use super::ViewResult;
use crate::db::repository::ShiftRepository;
use crate::db::services::find_shift;
use crate::models::{format_full_date, Directory, SectorAssignment, ShiftRecord};
use crate::routes::shift_detail::{
    EquipmentRow, SectorPanel, ShiftDetailPage, ShiftDetailView, ShiftHeader, TaskRow, WorkerCard,
};

/// Up to two uppercase initials, e.g. `TM` for `Thomas Müller`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

fn sector_panel(assignment: &SectorAssignment, directory: &Directory) -> SectorPanel {
    let sector_name = directory.sector_name(assignment.sector);
    SectorPanel {
        sector: assignment.sector,
        tasks: assignment
            .tasks
            .iter()
            .map(|task| TaskRow {
                code: task.code.clone(),
                description: task.description.clone(),
                status: task.status,
                status_label: task.status.label().to_string(),
                assignee: task.assignee,
                assignee_name: directory.worker_name(task.assignee),
                sector: assignment.sector,
                sector_name: sector_name.clone(),
            })
            .collect(),
        workers: assignment
            .workers
            .iter()
            .map(|w| {
                let name = directory.worker_name(w.worker);
                WorkerCard {
                    worker: w.worker,
                    initials: initials(&name),
                    name,
                    role: w.role.clone(),
                    hours: w.hours,
                    notes: w.notes.clone(),
                    sector: assignment.sector,
                    sector_name: sector_name.clone(),
                }
            })
            .collect(),
        sector_name,
    }
}

pub fn compute_shift_detail(shift: &ShiftRecord, directory: &Directory) -> ShiftDetailView {
    let lead_name = directory.lead_name(shift.lead);
    let header = ShiftHeader {
        shift_id: shift.id,
        shift_name: shift.name.clone(),
        date: shift.date,
        date_label: format_full_date(shift.date),
        window: shift.window.to_string(),
        lead_initials: initials(&lead_name),
        lead_contact: directory.lead_contact(shift.lead),
        lead_name,
        worker_count: shift.worker_count(),
        notes: shift.notes.clone(),
    };

    let sectors: Vec<SectorPanel> = shift
        .sectors
        .iter()
        .map(|s| sector_panel(s, directory))
        .collect();
    let tasks = sectors.iter().flat_map(|p| p.tasks.clone()).collect();
    let workers = sectors.iter().flat_map(|p| p.workers.clone()).collect();

    let equipment = shift
        .equipment
        .iter()
        .map(|e| EquipmentRow {
            id: e.id,
            name: e.name.clone(),
            code: e.code.clone(),
            sector: e.sector,
            sector_name: directory.sector_name(e.sector),
        })
        .collect();

    ShiftDetailView {
        header,
        sectors,
        tasks,
        workers,
        equipment,
    }
}

/// Detail page for `(date, shift_name)`; a missing shift gives the empty state.
pub fn compute_shift_detail_page(
    date: NaiveDate,
    shift_name: &str,
    shift: Option<&ShiftRecord>,
    directory: &Directory,
) -> ShiftDetailPage {
    match shift {
        Some(shift) => ShiftDetailPage::Found(Box::new(compute_shift_detail(shift, directory))),
        None => ShiftDetailPage::Missing {
            date,
            shift_name: shift_name.to_string(),
            message: format!(
                "Keine {} am {} geplant",
                shift_name,
                format_full_date(date)
            ),
        },
    }
}

/// Look up one shift and project it. Not-found is not an error here.
pub async fn get_shift_detail<R: ShiftRepository + ?Sized>(
    repo: &R,
    date: NaiveDate,
    shift_name: &str,
) -> ViewResult<ShiftDetailPage> {
    let shift = find_shift(repo, date, shift_name).await?;
    let directory = repo.directory().await?;
    Ok(compute_shift_detail_page(
        date,
        shift_name,
        shift.as_ref(),
        &directory,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sample::{sample_plan, EARLY_SHIFT};
    use crate::db::LocalRepository;
    use crate::models::TaskStatus;

    fn may(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, day).unwrap()
    }

    fn first_early() -> ShiftDetailView {
        let plan = sample_plan();
        compute_shift_detail(&plan.shifts[0], &plan.directory)
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Thomas Müller"), "TM");
        assert_eq!(initials("anna maria becker"), "AM");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_header() {
        let view = first_early();
        assert_eq!(view.header.shift_name, EARLY_SHIFT);
        assert_eq!(view.header.date_label, "01.05.2025");
        assert_eq!(view.header.window, "06:00 - 14:00");
        assert_eq!(view.header.lead_name, "Thomas Müller");
        assert_eq!(view.header.lead_initials, "TM");
        assert_eq!(view.header.lead_contact, "+49 123 456789");
        assert_eq!(view.header.worker_count, 4);
    }

    #[test]
    fn test_tabs_agree() {
        let view = first_early();
        assert_eq!(view.sectors.len(), 2);
        assert_eq!(view.sectors[0].sector_name, "Nordsektor");
        assert_eq!(view.tasks.len(), 4);
        assert_eq!(view.workers.len(), 4);

        let nested_tasks: usize = view.sectors.iter().map(|p| p.tasks.len()).sum();
        assert_eq!(nested_tasks, view.tasks.len());
        assert_eq!(view.tasks[2].code, "S1");
        assert_eq!(view.tasks[2].sector_name, "Südsektor");
        assert_eq!(view.tasks[0].status, TaskStatus::InProgress);
        assert_eq!(view.tasks[1].status_label, "Geplant");
        assert_eq!(view.tasks[0].assignee_name, "Lisa Schmidt");
    }

    #[test]
    fn test_equipment_keeps_sector() {
        let view = first_early();
        let codes: Vec<(&str, &str)> = view
            .equipment
            .iter()
            .map(|e| (e.code.as_str(), e.sector_name.as_str()))
            .collect();
        assert_eq!(
            codes,
            vec![
                ("B-123", "Nordsektor"),
                ("K-456", "Nordsektor"),
                ("BM-789", "Südsektor")
            ]
        );
    }

    #[test]
    fn test_projection_is_idempotent() {
        let plan = sample_plan();
        let shift = &plan.shifts[0];
        let first = compute_shift_detail(shift, &plan.directory);
        let second = compute_shift_detail(shift, &plan.directory);
        assert_eq!(first, second);
        assert_eq!(shift, &sample_plan().shifts[0]);
    }

    #[tokio::test]
    async fn test_missing_shift_is_placeholder() {
        let repo = LocalRepository::with_sample_data();
        let page = get_shift_detail(&repo, may(20), EARLY_SHIFT).await.unwrap();
        match page {
            ShiftDetailPage::Missing { message, .. } => {
                assert_eq!(message, "Keine Frühschicht am 20.05.2025 geplant")
            }
            ShiftDetailPage::Found(_) => panic!("expected placeholder"),
        }

        let page = get_shift_detail(&repo, may(1), EARLY_SHIFT).await.unwrap();
        assert!(page.is_found());
    }
}
