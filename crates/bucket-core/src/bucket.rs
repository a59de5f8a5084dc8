use chrono::NaiveDate;

use crate::model::{Bucket, CrewMember, ReserveStatus};

/// Scan window for run measurement, in days. A run that fills the whole
/// window reads as "this long or longer", so it can never satisfy an exact
/// bucket — requests of RUN_SCAN_DAYS or more always come back empty.
pub const RUN_SCAN_DAYS: u32 = 7;

/// Length of the consecutive same-status run anchored at `reference`,
/// together with the status being run. None when the member has no reserve
/// day on the reference date. Counting stops at RUN_SCAN_DAYS.
pub fn run_length(member: &CrewMember, reference: NaiveDate) -> Option<(ReserveStatus, u32)> {
    let target = member.status_on(reference)?;
    let mut count = 0;
    let mut day = reference;
    while count < RUN_SCAN_DAYS && member.status_on(day) == Some(target) {
        count += 1;
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    Some((target, count))
}

/// Members whose run from `reference` is exactly `requested` days long,
/// optionally restricted to runs of one status. Order of the result is
/// unspecified; apply [`order`] before display.
pub fn bucket(
    members: &[CrewMember],
    reference: NaiveDate,
    requested: u32,
    status_filter: Option<ReserveStatus>,
) -> Vec<CrewMember> {
    members
        .iter()
        .filter(|m| match run_length(m, reference) {
            Some((status, len)) => {
                len == requested
                    && len < RUN_SCAN_DAYS
                    && status_filter.map_or(true, |f| f == status)
            }
            None => false,
        })
        .cloned()
        .collect()
}

/// One bucket per run length 1 through RUN_SCAN_DAYS - 1, each ordered by
/// `key`. Empty buckets are kept so callers can render a fixed row.
pub fn buckets(
    members: &[CrewMember],
    reference: NaiveDate,
    status_filter: Option<ReserveStatus>,
    key: SortKey,
) -> Vec<Bucket> {
    (1..RUN_SCAN_DAYS)
        .map(|run_length| Bucket {
            run_length,
            members: order(bucket(members, reference, run_length, status_filter), key),
        })
        .collect()
}

/// Field a displayed member list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Seniority,
    EmployeeNumber,
}

/// Stable ascending order: numeric on seniority, lexical on the employee
/// number string. Ties keep input order.
pub fn order(mut members: Vec<CrewMember>, key: SortKey) -> Vec<CrewMember> {
    match key {
        SortKey::Seniority => members.sort_by_key(|m| m.seniority_number),
        SortKey::EmployeeNumber => {
            members.sort_by(|a, b| a.employee_number.cmp(&b.employee_number))
        }
    }
    members
}
