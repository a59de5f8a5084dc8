mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bucket",
    version,
    about = "Crew reserve schedule parser and bucket query tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a roster PDF (or pre-parsed JSON) into structured schedule data
    Parse {
        /// Path to roster PDF or JSON file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the parsed document to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// List members on an uninterrupted reserve run starting on a date
    Query {
        /// Path to roster PDF or JSON file
        input_file: PathBuf,

        /// Reference date (YYYY-MM-DD); defaults to the reserve day nearest today
        #[arg(short, long)]
        date: Option<String>,

        /// Exact run length in days; omit to show every bucket
        #[arg(short = 'n', long)]
        days: Option<u32>,

        /// Only count runs of this status: rsa or rsp
        #[arg(short, long)]
        status: Option<String>,

        /// Sort order: seniority (default) or employee
        #[arg(long, default_value = "seniority")]
        sort: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input_file,
            output,
            out,
        } => commands::parse::run(input_file, &output, out),
        Commands::Query {
            input_file,
            date,
            days,
            status,
            sort,
            output,
        } => commands::query::run(input_file, date, days, status, &sort, &output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
