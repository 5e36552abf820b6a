//! Referential integrity and staffing checks over a whole plan.
//!
//! Typed identifiers make dangling references detectable. Nothing found here
//! stops a view from rendering; the report only surfaces it.

use std::collections::BTreeMap;

use log::{debug, warn};

use crate::db::repository::{RepositoryResult, ShiftRepository};
use crate::models::{format_full_date, Directory, ShiftRecord, WorkerId};
use crate::routes::integrity::{IntegrityIssue, IntegrityReport, IssueKind};

fn shift_issue(shift: &ShiftRecord, kind: IssueKind, description: String) -> IntegrityIssue {
    IntegrityIssue {
        kind,
        shift_id: Some(shift.id),
        date: Some(shift.date),
        shift_name: Some(shift.name.clone()),
        description,
    }
}

fn check_references(shift: &ShiftRecord, directory: &Directory, issues: &mut Vec<IntegrityIssue>) {
    if directory.lead(shift.lead).is_none() {
        issues.push(shift_issue(
            shift,
            IssueKind::UnknownLead,
            format!("Shift lead {} is not in the directory", shift.lead.unresolved_label()),
        ));
    }

    for sector in &shift.sectors {
        if directory.sector(sector.sector).is_none() {
            issues.push(shift_issue(
                shift,
                IssueKind::UnknownSector,
                format!("Sector {} is not in the directory", sector.sector.unresolved_label()),
            ));
        }

        for worker in &sector.workers {
            if directory.worker(worker.worker).is_none() {
                issues.push(shift_issue(
                    shift,
                    IssueKind::UnknownWorker,
                    format!("Worker {} is not in the directory", worker.worker.unresolved_label()),
                ));
            }
        }

        for task in &sector.tasks {
            if directory.worker(task.assignee).is_none() {
                issues.push(shift_issue(
                    shift,
                    IssueKind::UnknownAssignee,
                    format!(
                        "Task {} is assigned to unknown worker {}",
                        task.code,
                        task.assignee.unresolved_label()
                    ),
                ));
            } else if !sector.workers.iter().any(|w| w.worker == task.assignee) {
                issues.push(shift_issue(
                    shift,
                    IssueKind::AssigneeNotInSector,
                    format!(
                        "Task {} is assigned to {}, who is not staffed in {}",
                        task.code,
                        directory.worker_name(task.assignee),
                        directory.sector_name(sector.sector)
                    ),
                ));
            }
        }
    }

    for equipment in &shift.equipment {
        if !shift.sectors.iter().any(|s| s.sector == equipment.sector) {
            issues.push(shift_issue(
                shift,
                IssueKind::UnknownEquipmentSector,
                format!(
                    "{} {} is assigned to {}, which is not part of this shift",
                    equipment.name,
                    equipment.code,
                    directory.sector_name(equipment.sector)
                ),
            ));
        }
    }
}

/// Workers assigned twice within one shift or to shifts with overlapping windows.
fn check_double_bookings(
    shifts: &[ShiftRecord],
    directory: &Directory,
    issues: &mut Vec<IntegrityIssue>,
) {
    let mut bookings: BTreeMap<WorkerId, Vec<&ShiftRecord>> = BTreeMap::new();
    for shift in shifts {
        for (_, assignment) in shift.workers_with_sector() {
            bookings.entry(assignment.worker).or_default().push(shift);
        }
    }

    for (worker, booked) in &bookings {
        for (i, first) in booked.iter().enumerate() {
            for second in &booked[i + 1..] {
                let clash = first.is_same_shift(second)
                    || first
                        .window
                        .overlaps_on(first.date, &second.window, second.date);
                if clash {
                    issues.push(shift_issue(
                        second,
                        IssueKind::DoubleBooking,
                        format!(
                            "{} is booked on {} {} and {} {}",
                            directory.worker_name(*worker),
                            first.name,
                            format_full_date(first.date),
                            second.name,
                            format_full_date(second.date)
                        ),
                    ));
                }
            }
        }
    }
}

/// Distinct worker ids sharing one display name. They are reported, never merged.
fn check_duplicate_names(directory: &Directory, issues: &mut Vec<IntegrityIssue>) {
    let mut by_name: BTreeMap<&str, Vec<WorkerId>> = BTreeMap::new();
    for worker in directory.workers.values() {
        by_name.entry(worker.name.as_str()).or_default().push(worker.id);
    }

    for (name, ids) in by_name.into_iter().filter(|(_, ids)| ids.len() > 1) {
        let labels: Vec<String> = ids.iter().map(|id| id.unresolved_label()).collect();
        issues.push(IntegrityIssue {
            kind: IssueKind::DuplicateWorkerName,
            shift_id: None,
            date: None,
            shift_name: None,
            description: format!("'{}' is shared by workers {}", name, labels.join(", ")),
        });
    }
}

pub fn compute_integrity_report(shifts: &[ShiftRecord], directory: &Directory) -> IntegrityReport {
    let mut issues = Vec::new();
    for shift in shifts {
        check_references(shift, directory, &mut issues);
    }
    check_double_bookings(shifts, directory, &mut issues);
    check_duplicate_names(directory, &mut issues);

    IntegrityReport {
        total_shifts: shifts.len(),
        issues,
    }
}

/// Check every shift in the store.
pub async fn get_integrity_report<R: ShiftRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<IntegrityReport> {
    let directory = repo.directory().await?;
    let shifts = repo
        .get_shifts_by_date_range(chrono::NaiveDate::MIN, chrono::NaiveDate::MAX)
        .await?;
    let report = compute_integrity_report(&shifts, &directory);
    if report.is_clean() {
        debug!("Integrity check: {} shifts, no issues", report.total_shifts);
    } else {
        warn!(
            "Integrity check: {} issues across {} shifts",
            report.issues.len(),
            report.total_shifts
        );
    }
    Ok(report)
}
