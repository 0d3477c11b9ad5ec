//! CLI subcommand implementations.

pub mod analyze;
pub mod config;
pub mod suggest;

use std::io::{IsTerminal, Read};
use std::path::Path;

use taskrank_core::ScoredTask;

/// Read the request payload from a file, or stdin when no path is given.
///
/// An interactive terminal with no piped input counts as an empty payload,
/// so `suggest` can run with no input at all.
pub(crate) fn read_payload(path: Option<&Path>) -> Result<String, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut stdin = std::io::stdin();
            if stdin.is_terminal() {
                return Ok(String::new());
            }
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Print ranked tasks as a `{"tasks": [...]}` JSON document.
pub(crate) fn print_tasks(
    tasks: &[ScoredTask],
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = serde_json::json!({ "tasks": tasks });
    let rendered = if pretty {
        serde_json::to_string_pretty(&doc)?
    } else {
        serde_json::to_string(&doc)?
    };
    println!("{rendered}");
    Ok(())
}
