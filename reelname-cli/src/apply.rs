use anyhow::Result;
use nu_ansi_term::{Color, Style};
use reelname_core::{
    course_mapping, run, run_with_progress, EntryOutcome, OutputFormatter, RenameOptions,
    RunSummary,
};
use std::path::PathBuf;

use crate::OutputFormat;

/// Run the built-in mapping. Returns whether every entry went through without
/// a failure.
pub fn handle_apply(
    directory: PathBuf,
    dry_run: bool,
    log_file: Option<PathBuf>,
    output: OutputFormat,
    quiet: bool,
    use_color: bool,
) -> Result<bool> {
    let mapping = course_mapping();
    let options = RenameOptions { dry_run, log_file };

    let summary = match output {
        OutputFormat::Json => {
            let summary = run(&directory, &mapping, &options)?;
            println!("{}", summary.format_json());
            summary
        },
        OutputFormat::Summary if quiet => run(&directory, &mapping, &options)?,
        OutputFormat::Summary => {
            // Stream one line per entry as it is processed
            let summary = run_with_progress(&directory, &mapping, &options, |outcome| {
                println!("{}", paint_outcome(outcome, dry_run, use_color));
            })?;
            println!("{}", paint_completion(&summary, use_color));
            summary
        },
    };

    Ok(summary.is_success())
}

fn paint_outcome(outcome: &EntryOutcome, dry_run: bool, use_color: bool) -> String {
    let line = outcome.message(dry_run);
    if !use_color {
        return line;
    }

    let style = match outcome {
        EntryOutcome::Renamed { .. } => Color::Green.normal(),
        EntryOutcome::Unchanged { .. } => Style::new().dimmed(),
        EntryOutcome::Skipped { .. } => Color::Yellow.normal(),
        EntryOutcome::Failed { .. } => Color::Red.bold(),
    };
    style.paint(line).to_string()
}

fn paint_completion(summary: &RunSummary, use_color: bool) -> String {
    let line = summary.completion_message();
    if !use_color {
        return line;
    }

    let color = if summary.is_success() {
        Color::Green
    } else {
        Color::Red
    };
    color.bold().paint(line).to_string()
}
