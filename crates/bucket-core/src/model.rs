use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Reserve duty status. A member holds exactly one status per calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReserveStatus {
    #[serde(rename = "RSA")]
    Rsa,
    #[serde(rename = "RSP")]
    Rsp,
}

impl ReserveStatus {
    pub fn from_code(s: &str) -> Option<ReserveStatus> {
        match s {
            "RSA" => Some(ReserveStatus::Rsa),
            "RSP" => Some(ReserveStatus::Rsp),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ReserveStatus::Rsa => "RSA",
            ReserveStatus::Rsp => "RSP",
        }
    }
}

impl fmt::Display for ReserveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One crew member's reserve assignments for the roster month.
///
/// `reserve_days` is keyed by date, so re-recording a day replaces the
/// earlier status. A member kept in a parsed document always has at least
/// one reserve day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub seniority_number: u32,
    pub employee_number: String,
    /// Not populated by the parser; kept for callers that enrich records.
    #[serde(default)]
    pub name: String,
    pub reserve_days: BTreeMap<NaiveDate, ReserveStatus>,
}

impl CrewMember {
    pub fn is_on_reserve(&self, date: NaiveDate) -> bool {
        self.reserve_days.contains_key(&date)
    }

    pub fn status_on(&self, date: NaiveDate) -> Option<ReserveStatus> {
        self.reserve_days.get(&date).copied()
    }

    /// The status held on the most days. On an exact tie the status that
    /// appears first in date order wins, so the result is deterministic.
    pub fn dominant_status(&self) -> Option<ReserveStatus> {
        let mut counts: BTreeMap<ReserveStatus, usize> = BTreeMap::new();
        for status in self.reserve_days.values() {
            *counts.entry(*status).or_insert(0) += 1;
        }
        let max = counts.values().copied().max()?;
        self.reserve_days
            .values()
            .find(|s| counts[*s] == max)
            .copied()
    }
}

/// A fully parsed roster: the resolved period plus every member found.
///
/// Members carry no ordering guarantee; use [`crate::bucket::order`] before
/// display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDocument {
    pub month: u32,
    pub year: i32,
    pub members: Vec<CrewMember>,
}

impl ScheduleDocument {
    /// The recorded reserve date closest to `to`, across all members.
    /// Earlier date wins when two dates are equally close.
    pub fn nearest_reserve_day(&self, to: NaiveDate) -> Option<NaiveDate> {
        self.members
            .iter()
            .flat_map(|m| m.reserve_days.keys().copied())
            .min_by_key(|d| ((*d - to).num_days().abs(), *d))
    }
}

/// Members whose consecutive same-status run from a reference date equals
/// exactly `run_length`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub run_length: u32,
    pub members: Vec<CrewMember>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, day).unwrap()
    }

    fn member(days: &[(u32, ReserveStatus)]) -> CrewMember {
        CrewMember {
            seniority_number: 87,
            employee_number: "157629".into(),
            name: String::new(),
            reserve_days: days.iter().map(|&(day, s)| (d(day), s)).collect(),
        }
    }

    #[test]
    fn test_status_codes_round_trip() {
        assert_eq!(ReserveStatus::from_code("RSA"), Some(ReserveStatus::Rsa));
        assert_eq!(ReserveStatus::from_code("RSP"), Some(ReserveStatus::Rsp));
        assert_eq!(ReserveStatus::from_code("RSX"), None);
        assert_eq!(ReserveStatus::Rsa.to_string(), "RSA");
    }

    #[test]
    fn test_is_on_reserve() {
        let m = member(&[(1, ReserveStatus::Rsa), (2, ReserveStatus::Rsa)]);
        assert!(m.is_on_reserve(d(1)));
        assert!(!m.is_on_reserve(d(3)));
    }

    #[test]
    fn test_dominant_status_majority() {
        let m = member(&[
            (1, ReserveStatus::Rsa),
            (2, ReserveStatus::Rsp),
            (3, ReserveStatus::Rsp),
        ]);
        assert_eq!(m.dominant_status(), Some(ReserveStatus::Rsp));
    }

    #[test]
    fn test_dominant_status_tie_first_seen_wins() {
        let m = member(&[(1, ReserveStatus::Rsp), (2, ReserveStatus::Rsa)]);
        assert_eq!(m.dominant_status(), Some(ReserveStatus::Rsp));
    }

    #[test]
    fn test_dominant_status_empty() {
        let m = member(&[]);
        assert_eq!(m.dominant_status(), None);
    }

    #[test]
    fn test_nearest_reserve_day() {
        let doc = ScheduleDocument {
            month: 12,
            year: 2024,
            members: vec![
                member(&[(5, ReserveStatus::Rsa)]),
                member(&[(19, ReserveStatus::Rsp)]),
            ],
        };
        assert_eq!(doc.nearest_reserve_day(d(7)), Some(d(5)));
        assert_eq!(doc.nearest_reserve_day(d(17)), Some(d(19)));
        // Equidistant: earlier date wins
        assert_eq!(doc.nearest_reserve_day(d(12)), Some(d(5)));
    }

    #[test]
    fn test_nearest_reserve_day_empty() {
        let doc = ScheduleDocument {
            month: 12,
            year: 2024,
            members: vec![],
        };
        assert_eq!(doc.nearest_reserve_day(d(1)), None);
    }
}
