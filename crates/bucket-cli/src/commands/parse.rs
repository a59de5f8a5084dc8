use bucket_core::error::BucketError;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), BucketError> {
    let doc = super::load_document(&input_file)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&doc)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Parsed {} member record(s), written to {}",
                doc.members.len(),
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print_document(&doc)?,
            _ => output::table::print_document(&doc),
        },
    }

    Ok(())
}
