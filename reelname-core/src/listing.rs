use crate::mapping::RenameMapping;
use crate::outcome::EntryOutcome;
use crate::output::OutputFormatter;
use crate::renamer::{check_directory, preview_entry, target_exists};
use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::{self, Write as _};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

/// Where an entry stands relative to the files on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    /// The old file is there and would be renamed
    Pending,
    /// The old file is gone and the new one exists
    Done,
    /// Neither name is present
    Missing,
    /// Identity entry whose file is present
    Unchanged,
    /// The new name is already taken by another file
    Conflict,
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "pending",
            Self::Done => "done",
            Self::Missing => "missing",
            Self::Unchanged => "unchanged",
            Self::Conflict => "conflict",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingRow {
    pub index: usize,
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntryStatus>,
}

/// The mapping, optionally checked against a directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingListing {
    pub directory: Option<PathBuf>,
    pub rows: Vec<ListingRow>,
}

/// List the mapping. With a directory, each row also gets its current status;
/// nothing on disk is changed.
pub fn list_mapping(mapping: &RenameMapping, directory: Option<&Path>) -> Result<MappingListing> {
    if let Some(dir) = directory {
        check_directory(dir)?;
    }

    let rows = mapping
        .iter()
        .enumerate()
        .map(|(i, entry)| ListingRow {
            index: i + 1,
            from: entry.from.clone(),
            to: entry.to.clone(),
            status: directory.map(|dir| match preview_entry(dir, entry) {
                EntryOutcome::Renamed { .. } => EntryStatus::Pending,
                EntryOutcome::Unchanged { .. } => EntryStatus::Unchanged,
                EntryOutcome::Failed { .. } => EntryStatus::Conflict,
                EntryOutcome::Skipped { .. } if target_exists(dir, entry) => EntryStatus::Done,
                EntryOutcome::Skipped { .. } => EntryStatus::Missing,
            }),
        })
        .collect();

    Ok(MappingListing {
        directory: directory.map(Path::to_path_buf),
        rows,
    })
}

impl MappingListing {
    pub fn render_table(&self, use_color: bool) -> String {
        let mut table = Table::new();

        if io::stdout().is_terminal() {
            table.set_content_arrangement(ContentArrangement::Dynamic);
        } else {
            table.set_content_arrangement(ContentArrangement::Disabled);
        }

        if use_color {
            table.enforce_styling();
        }

        let with_status = self.directory.is_some();
        let mut headers = vec!["#", "Current name", "New name"];
        if with_status {
            headers.push("Status");
        }
        if use_color {
            table.set_header(headers.into_iter().map(|h| Cell::new(h).fg(Color::Cyan)));
        } else {
            table.set_header(headers);
        }

        for row in &self.rows {
            let mut cells = vec![
                Cell::new(row.index),
                Cell::new(&row.from),
                Cell::new(&row.to),
            ];
            if let Some(status) = row.status {
                let mut cell = Cell::new(status);
                if use_color {
                    cell = cell.fg(status_color(status));
                }
                cells.push(cell);
            }
            table.add_row(cells);
        }

        table.to_string()
    }

    /// Table plus a one-line tally.
    pub fn render(&self, use_color: bool) -> String {
        let mut output = self.render_table(use_color);
        output.push('\n');
        if self.directory.is_some() {
            writeln!(
                output,
                "{} entries: {} pending, {} done, {} missing, {} unchanged, {} conflicts",
                self.rows.len(),
                self.count(EntryStatus::Pending),
                self.count(EntryStatus::Done),
                self.count(EntryStatus::Missing),
                self.count(EntryStatus::Unchanged),
                self.count(EntryStatus::Conflict),
            )
            .unwrap();
        } else {
            writeln!(output, "{} entries", self.rows.len()).unwrap();
        }
        output
    }

    fn count(&self, status: EntryStatus) -> usize {
        self.rows.iter().filter(|r| r.status == Some(status)).count()
    }
}

fn status_color(status: EntryStatus) -> Color {
    match status {
        EntryStatus::Pending => Color::Green,
        EntryStatus::Done | EntryStatus::Unchanged => Color::DarkGrey,
        EntryStatus::Missing => Color::Yellow,
        EntryStatus::Conflict => Color::Red,
    }
}

impl OutputFormatter for MappingListing {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "list",
            "directory": self.directory,
            "entries": self.rows,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        self.render(false)
    }
}
