//! Analyze command: score and rank a task payload.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Args;
use taskrank_core::{analyze, TaskPayload};

use crate::config::Config;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Read the JSON payload from a file instead of stdin
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Reference day (YYYY-MM-DD); defaults to the local calendar date
    #[arg(long)]
    pub today: Option<NaiveDate>,
    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    let payload = super::read_payload(args.input.as_deref())?;
    let records = TaskPayload::parse(&payload)?.into_records();

    // Sampled once; every task in the batch is scored against the same day.
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let ranked = analyze(&records, today);
    super::print_tasks(&ranked, args.pretty || config.output.pretty)
}
