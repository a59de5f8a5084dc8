use chrono::NaiveDate;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::{debug, trace};

use crate::model::{CrewMember, ReserveStatus};

/// Member header row: optional '#', seniority number, '/', 6-digit employee
/// number. May be surrounded by other grid text on the same line.
static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#?\s*(\d+)\s*/\s*(\d{6})").unwrap());

/// Reserve marker row: the line is a single status code.
static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*(RSA|RSP)\s*$").unwrap());

/// Parse the lines of one roster page into completed member records.
///
/// Each call starts from a clean scan state; nothing carries over between
/// pages or between calls.
pub fn parse_page(lines: &[&str], month: u32, year: i32) -> Vec<CrewMember> {
    let mut scan = PageScan::new(month, year);
    for line in lines {
        scan.step(line);
    }
    scan.finish()
}

/// Scan state for one page: the member currently being accumulated, if any,
/// and the day counter that assigns each marker line its date.
struct PageScan {
    month: u32,
    year: i32,
    active: Option<ActiveMember>,
    done: Vec<CrewMember>,
}

struct ActiveMember {
    seniority_number: u32,
    employee_number: String,
    days: BTreeMap<NaiveDate, ReserveStatus>,
    /// 1-based day of month the next marker line lands on. Advances only
    /// when a marker is recorded, never on unmatched lines.
    next_day: u32,
}

impl PageScan {
    fn new(month: u32, year: i32) -> PageScan {
        PageScan {
            month,
            year,
            active: None,
            done: Vec::new(),
        }
    }

    /// Classify one line. The header pattern is tried first; a line that
    /// could read as both is always a header.
    fn step(&mut self, line: &str) {
        if let Some(caps) = HEADER_RE.captures(line) {
            if let Ok(seniority) = caps[1].parse::<u32>() {
                self.begin_member(seniority, caps[2].to_string());
                return;
            }
        }

        if let Some(caps) = MARKER_RE.captures(line) {
            // The pattern only admits known codes
            if let Some(status) = ReserveStatus::from_code(&caps[1]) {
                self.record_day(status);
            }
        }
    }

    fn begin_member(&mut self, seniority_number: u32, employee_number: String) {
        self.emit_active();
        self.active = Some(ActiveMember {
            seniority_number,
            employee_number,
            days: BTreeMap::new(),
            next_day: 1,
        });
    }

    fn record_day(&mut self, status: ReserveStatus) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        match NaiveDate::from_ymd_opt(self.year, self.month, active.next_day) {
            Some(date) => {
                // Same-date re-record overwrites the earlier status
                active.days.insert(date, status);
                active.next_day += 1;
            }
            None => {
                // Marker past the end of the month: dropped, counter held
                trace!(
                    day = active.next_day,
                    month = self.month,
                    "reserve marker beyond month end, skipped"
                );
            }
        }
    }

    /// Complete the active member. Members with no recorded days are
    /// silently dropped (a header row with no markers under it).
    fn emit_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        if active.days.is_empty() {
            trace!(
                seniority = active.seniority_number,
                "member had no reserve days, dropped"
            );
            return;
        }
        debug!(
            seniority = active.seniority_number,
            days = active.days.len(),
            "completed member record"
        );
        self.done.push(CrewMember {
            seniority_number: active.seniority_number,
            employee_number: active.employee_number,
            name: String::new(),
            reserve_days: active.days,
        });
    }

    fn finish(mut self) -> Vec<CrewMember> {
        self.emit_active();
        self.done
    }
}
