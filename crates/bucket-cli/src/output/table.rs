use bucket_core::model::{Bucket, CrewMember, ScheduleDocument};
use chrono::NaiveDate;

pub fn print_document(doc: &ScheduleDocument) {
    println!("Roster period: {:04}-{:02}", doc.year, doc.month);
    println!("{} member record(s)\n", doc.members.len());

    for m in &doc.members {
        println!("  {}", member_line(m));
    }
}

fn member_line(m: &CrewMember) -> String {
    let dominant = m.dominant_status().map(|s| s.code()).unwrap_or("-");
    match (m.reserve_days.keys().next(), m.reserve_days.keys().next_back()) {
        (Some(first), Some(last)) => format!(
            "#{:<5} {}  {}  {} day(s)  {} .. {}",
            m.seniority_number,
            m.employee_number,
            dominant,
            m.reserve_days.len(),
            first,
            last
        ),
        _ => format!(
            "#{:<5} {}  no reserve days",
            m.seniority_number, m.employee_number
        ),
    }
}

pub fn print_buckets(reference: NaiveDate, row: &[Bucket]) {
    for b in row {
        println!("=== {}-day runs from {} ===", b.run_length, reference);
        if b.members.is_empty() {
            println!("  (none)\n");
            continue;
        }
        for m in &b.members {
            let status = m.status_on(reference).map(|s| s.code()).unwrap_or("-");
            println!("  #{:<5} {}  {}", m.seniority_number, m.employee_number, status);
        }
        println!();
    }
}
