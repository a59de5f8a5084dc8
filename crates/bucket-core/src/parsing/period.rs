use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// "Period: December 2024" — month name plus 4-digit year.
static PERIOD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Period:\s*([A-Za-z]+)\s*(\d{4})").unwrap());

/// Ordered month-name table used to resolve the period marker.
///
/// Passed in explicitly so parsing stays deterministic regardless of the
/// process locale. Matching is case-sensitive, exactly as the roster
/// publisher prints the names.
#[derive(Debug, Clone)]
pub struct MonthTable {
    names: Vec<String>,
}

impl MonthTable {
    pub fn english() -> MonthTable {
        MonthTable {
            names: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }

    /// Build a table for another locale. Returns None unless exactly 12
    /// names are given, January first.
    pub fn from_names(names: Vec<String>) -> Option<MonthTable> {
        if names.len() == 12 {
            Some(MonthTable { names })
        } else {
            None
        }
    }

    /// Resolve a month name to its 1-based index.
    pub fn resolve(&self, name: &str) -> Option<u32> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| i as u32 + 1)
    }

    /// Name for a 1-based month index (for display).
    pub fn name(&self, month: u32) -> Option<&str> {
        self.names.get(month.checked_sub(1)? as usize).map(|s| s.as_str())
    }
}

impl Default for MonthTable {
    fn default() -> Self {
        MonthTable::english()
    }
}

/// Find the first "Period:" marker in the given lines and resolve it.
///
/// Returns None when the marker is absent, the month name is not in the
/// table, or the year does not parse. The assembler only consults the
/// first page.
pub fn extract_period(lines: &[&str], months: &MonthTable) -> Option<(u32, i32)> {
    for line in lines {
        let Some(caps) = PERIOD_RE.captures(line) else {
            continue;
        };
        let month = months.resolve(&caps[1])?;
        let year: i32 = caps[2].parse().ok()?;
        debug!(month, year, "resolved roster period");
        return Some((month, year));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_period_basic() {
        let lines = ["Reserve Availability", "Period: December 2024", "Base: CAC"];
        assert_eq!(
            extract_period(&lines, &MonthTable::english()),
            Some((12, 2024))
        );
    }

    #[test]
    fn test_extract_period_first_marker_wins() {
        let lines = ["Period: March 2025", "Period: April 2025"];
        assert_eq!(
            extract_period(&lines, &MonthTable::english()),
            Some((3, 2025))
        );
    }

    #[test]
    fn test_extract_period_missing_marker() {
        let lines = ["Reserve Availability", "Base: CAC"];
        assert_eq!(extract_period(&lines, &MonthTable::english()), None);
    }

    #[test]
    fn test_extract_period_unknown_month() {
        let lines = ["Period: Decembre 2024"];
        assert_eq!(extract_period(&lines, &MonthTable::english()), None);
    }

    #[test]
    fn test_month_match_is_case_sensitive() {
        let lines = ["Period: december 2024"];
        assert_eq!(extract_period(&lines, &MonthTable::english()), None);
    }

    #[test]
    fn test_custom_month_table() {
        let table = MonthTable::from_names(
            [
                "januari", "februari", "mars", "april", "maj", "juni", "juli", "augusti",
                "september", "oktober", "november", "december",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        )
        .unwrap();
        let lines = ["Period: december 2024"];
        assert_eq!(extract_period(&lines, &table), Some((12, 2024)));
    }

    #[test]
    fn test_from_names_rejects_wrong_length() {
        assert!(MonthTable::from_names(vec!["January".into()]).is_none());
    }

    #[test]
    fn test_month_name_lookup() {
        let table = MonthTable::english();
        assert_eq!(table.name(12), Some("December"));
        assert_eq!(table.name(0), None);
        assert_eq!(table.name(13), None);
    }
}
