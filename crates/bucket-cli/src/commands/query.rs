use bucket_core::bucket::{bucket, buckets, order, SortKey};
use bucket_core::error::BucketError;
use bucket_core::model::{Bucket, ReserveStatus};
use chrono::NaiveDate;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    date: Option<String>,
    days: Option<u32>,
    status: Option<String>,
    sort: &str,
    output_format: &str,
) -> Result<(), BucketError> {
    let doc = super::load_document(&input_file)?;

    let status_filter = match status {
        Some(s) => Some(
            ReserveStatus::from_code(&s.to_uppercase())
                .ok_or(BucketError::InvalidStatus(s))?,
        ),
        None => None,
    };

    let key = match sort {
        "employee" => SortKey::EmployeeNumber,
        _ => SortKey::Seniority,
    };

    let reference = match date {
        Some(s) => {
            NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| BucketError::InvalidDate(s))?
        }
        None => {
            // No date given: snap today to the nearest recorded reserve day
            let today = chrono::Local::now().date_naive();
            doc.nearest_reserve_day(today).unwrap_or(today)
        }
    };

    let row: Vec<Bucket> = match days {
        Some(n) => vec![Bucket {
            run_length: n,
            members: order(bucket(&doc.members, reference, n, status_filter), key),
        }],
        None => buckets(&doc.members, reference, status_filter, key),
    };

    match output_format {
        "json" => output::json::print_buckets(&row)?,
        _ => output::table::print_buckets(reference, &row),
    }

    Ok(())
}
