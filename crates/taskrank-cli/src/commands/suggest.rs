//! Suggest command: top tasks for the day, with explanations.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Args;
use taskrank_core::{suggest, TaskPayload};

use crate::config::Config;

#[derive(Args)]
pub struct SuggestArgs {
    /// Read the JSON payload from a file instead of stdin
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Reference day (YYYY-MM-DD); defaults to the local calendar date
    #[arg(long)]
    pub today: Option<NaiveDate>,
    /// Maximum number of suggestions (defaults to the configured limit)
    #[arg(long)]
    pub limit: Option<usize>,
    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: SuggestArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    let payload = super::read_payload(args.input.as_deref())?;
    let records = TaskPayload::parse(&payload)?.into_records();

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let limit = args.limit.unwrap_or(config.suggest.limit);

    // An empty batch falls back to the built-in sample set inside the core.
    let suggested = suggest(&records, today, limit);
    super::print_tasks(&suggested, args.pretty || config.output.pretty)
}
