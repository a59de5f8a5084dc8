use bucket_core::error::BucketError;
use bucket_core::model::{Bucket, ScheduleDocument};

pub fn print_document(doc: &ScheduleDocument) -> Result<(), BucketError> {
    let json = serde_json::to_string_pretty(doc)?;
    println!("{json}");
    Ok(())
}

pub fn print_buckets(row: &[Bucket]) -> Result<(), BucketError> {
    let json = serde_json::to_string_pretty(row)?;
    println!("{json}");
    Ok(())
}
