pub mod page;
pub mod period;

use crate::error::BucketError;
use crate::extraction::PageContent;
use crate::model::ScheduleDocument;
use page::parse_page;
use period::{extract_period, MonthTable};
use tracing::debug;

/// Assemble extracted page text into a ScheduleDocument.
///
/// The period marker is read from the first page only; every page is then
/// parsed against that single (month, year). Per-page member lists are
/// concatenated without merging by employee number, so a member whose rows
/// span a page break yields one record per page.
pub fn assemble(
    pages: &[PageContent],
    months: &MonthTable,
) -> Result<ScheduleDocument, BucketError> {
    let first = pages.first().ok_or(BucketError::MissingPeriod)?;
    let first_lines: Vec<&str> = first.lines.iter().map(|s| s.as_str()).collect();
    let (month, year) =
        extract_period(&first_lines, months).ok_or(BucketError::MissingPeriod)?;

    let mut members = Vec::new();
    for page in pages {
        let lines: Vec<&str> = page.lines.iter().map(|s| s.as_str()).collect();
        let parsed = parse_page(&lines, month, year);
        debug!(
            page = page.page_number,
            members = parsed.len(),
            "parsed roster page"
        );
        members.extend(parsed);
    }

    if members.is_empty() {
        return Err(BucketError::NoReserveData);
    }

    Ok(ScheduleDocument {
        month,
        year,
        members,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(number: usize, lines: &[&str]) -> PageContent {
        PageContent {
            page_number: number,
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_assemble_single_page() {
        let pages = [content(
            1,
            &["Period: December 2024", "87 / 157629", "RSA", "RSA"],
        )];
        let doc = assemble(&pages, &MonthTable::english()).unwrap();
        assert_eq!((doc.month, doc.year), (12, 2024));
        assert_eq!(doc.members.len(), 1);
    }

    #[test]
    fn test_assemble_period_only_read_from_first_page() {
        let pages = [
            content(1, &["Period: December 2024", "87 / 157629", "RSA"]),
            content(2, &["Period: January 2025", "89 / 586473", "RSP"]),
        ];
        let doc = assemble(&pages, &MonthTable::english()).unwrap();
        assert_eq!((doc.month, doc.year), (12, 2024));
        // Page 2 parsed with page 1's period
        let second = &doc.members[1];
        assert!(second.is_on_reserve(
            chrono::NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()
        ));
    }

    #[test]
    fn test_assemble_missing_period() {
        let pages = [content(1, &["87 / 157629", "RSA"])];
        let err = assemble(&pages, &MonthTable::english()).unwrap_err();
        assert!(matches!(err, BucketError::MissingPeriod));
    }

    #[test]
    fn test_assemble_no_reserve_data() {
        let pages = [
            content(1, &["Period: December 2024", "nothing here"]),
            content(2, &["still nothing"]),
        ];
        let err = assemble(&pages, &MonthTable::english()).unwrap_err();
        assert!(matches!(err, BucketError::NoReserveData));
    }

    #[test]
    fn test_assemble_empty_document() {
        let err = assemble(&[], &MonthTable::english()).unwrap_err();
        assert!(matches!(err, BucketError::MissingPeriod));
    }

    #[test]
    fn test_member_spanning_pages_stays_split() {
        let pages = [
            content(1, &["Period: December 2024", "87 / 157629", "RSA"]),
            content(2, &["87 / 157629", "RSP"]),
        ];
        let doc = assemble(&pages, &MonthTable::english()).unwrap();
        // One record per page, not merged
        assert_eq!(doc.members.len(), 2);
        assert_eq!(doc.members[0].employee_number, doc.members[1].employee_number);
    }
}
