use crate::error::RenameError;
use crate::mapping::{RenameEntry, RenameMapping};
use crate::outcome::{EntryOutcome, RunSummary};
use crate::run_log::RunLog;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Options for a rename run
#[derive(Debug, Clone, Default)]
pub struct RenameOptions {
    /// Check every entry but leave the directory untouched
    pub dry_run: bool,
    /// Append progress to this file (ignored for dry runs)
    pub log_file: Option<PathBuf>,
}

/// Apply `mapping` to the files in `directory`.
pub fn run(
    directory: &Path,
    mapping: &RenameMapping,
    options: &RenameOptions,
) -> Result<RunSummary> {
    run_with_progress(directory, mapping, options, |_| {})
}

/// Apply `mapping` to the files in `directory`, calling `on_outcome` after each
/// entry in mapping order.
///
/// Only a missing or unreadable directory aborts the run. Absent files are
/// skipped and per-entry failures are recorded in the summary.
pub fn run_with_progress<F>(
    directory: &Path,
    mapping: &RenameMapping,
    options: &RenameOptions,
    mut on_outcome: F,
) -> Result<RunSummary>
where
    F: FnMut(&EntryOutcome),
{
    check_directory(directory)?;

    let mut log = match options.log_file.as_deref() {
        Some(path) if !options.dry_run => RunLog::open(path).unwrap_or_else(|e| {
            eprintln!("Warning: {e:#}");
            RunLog::disabled()
        }),
        _ => RunLog::disabled(),
    };
    log.record(&format!(
        "Renaming {} entries in {}",
        mapping.len(),
        directory.display()
    ));

    let mut state = DirState::new(directory, options.dry_run);
    let mut outcomes = Vec::with_capacity(mapping.len());
    for entry in mapping {
        let outcome = process_entry(&mut state, entry);
        log.record(&outcome.message(options.dry_run));
        on_outcome(&outcome);
        outcomes.push(outcome);
    }

    let summary = RunSummary {
        directory: directory.to_path_buf(),
        dry_run: options.dry_run,
        outcomes,
    };
    log.record(&summary.completion_message());

    Ok(summary)
}

pub(crate) fn check_directory(directory: &Path) -> Result<(), RenameError> {
    let metadata = fs::metadata(directory).map_err(|e| match e.kind() {
        ErrorKind::NotFound => RenameError::MissingDirectory(directory.to_path_buf()),
        _ => RenameError::Unreadable {
            path: directory.to_path_buf(),
            source: e,
        },
    })?;

    if !metadata.is_dir() {
        return Err(RenameError::NotADirectory(directory.to_path_buf()));
    }

    fs::read_dir(directory).map_err(|e| RenameError::Unreadable {
        path: directory.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// What a run would do with `entry` right now, without touching the disk.
pub(crate) fn preview_entry(directory: &Path, entry: &RenameEntry) -> EntryOutcome {
    process_entry(&mut DirState::new(directory, true), entry)
}

pub(crate) fn target_exists(directory: &Path, entry: &RenameEntry) -> bool {
    exists(&directory.join(&entry.to))
}

/// The directory as the run sees it. A dry run records its renames here
/// instead of on disk, so later entries are checked against them.
struct DirState<'a> {
    directory: &'a Path,
    dry_run: bool,
    /// Names renamed away during a dry run
    removed: HashSet<String>,
    /// Names renamed into during a dry run
    added: HashSet<String>,
}

impl<'a> DirState<'a> {
    fn new(directory: &'a Path, dry_run: bool) -> Self {
        Self {
            directory,
            dry_run,
            removed: HashSet::new(),
            added: HashSet::new(),
        }
    }

    fn simulated(&self, name: &str) -> Option<bool> {
        if self.added.contains(name) {
            Some(true)
        } else if self.removed.contains(name) {
            Some(false)
        } else {
            None
        }
    }

    fn exists(&self, name: &str) -> bool {
        self.simulated(name)
            .unwrap_or_else(|| exists(&self.directory.join(name)))
    }

    fn has_exact_entry(&self, name: &str) -> io::Result<bool> {
        match self.simulated(name) {
            Some(present) => Ok(present),
            None => has_exact_entry(self.directory, name),
        }
    }

    fn rename(&mut self, from: &str, to: &str, via_temp: bool) -> Result<()> {
        if self.dry_run {
            self.added.remove(from);
            self.removed.insert(from.to_string());
            self.removed.remove(to);
            self.added.insert(to.to_string());
            return Ok(());
        }

        let old_path = self.directory.join(from);
        let new_path = self.directory.join(to);
        if via_temp {
            rename_via_temp(&old_path, &new_path)
        } else {
            fs::rename(&old_path, &new_path).with_context(|| {
                format!(
                    "Failed to rename {} to {}",
                    old_path.display(),
                    new_path.display()
                )
            })
        }
    }
}

fn process_entry(state: &mut DirState<'_>, entry: &RenameEntry) -> EntryOutcome {
    match try_entry(state, entry) {
        Ok(outcome) => outcome,
        Err(e) => EntryOutcome::Failed {
            from: entry.from.clone(),
            to: entry.to.clone(),
            reason: format!("{e:#}"),
        },
    }
}

fn try_entry(state: &mut DirState<'_>, entry: &RenameEntry) -> Result<EntryOutcome> {
    // On a case-insensitive filesystem the old spelling of a case-only entry
    // keeps resolving after the rename, so only an exact listing match counts.
    let present = if entry.is_case_only() {
        state.has_exact_entry(&entry.from)?
    } else {
        state.exists(&entry.from)
    };
    if !present {
        return Ok(EntryOutcome::Skipped {
            from: entry.from.clone(),
        });
    }

    if entry.is_identity() {
        return Ok(EntryOutcome::Unchanged {
            name: entry.from.clone(),
        });
    }

    let mut case_fold_alias = false;
    if state.exists(&entry.to) {
        case_fold_alias = entry.is_case_only() && !state.has_exact_entry(&entry.to)?;
        if !case_fold_alias {
            return Ok(EntryOutcome::Failed {
                from: entry.from.clone(),
                to: entry.to.clone(),
                reason: format!("target '{}' already exists", entry.to),
            });
        }
    }

    state.rename(&entry.from, &entry.to, case_fold_alias)?;

    Ok(EntryOutcome::Renamed {
        from: entry.from.clone(),
        to: entry.to.clone(),
    })
}

/// Case-only rename on a case-insensitive filesystem: go through a temporary
/// name so the new casing is actually stored.
fn rename_via_temp(from: &Path, to: &Path) -> Result<()> {
    let file_name = from
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp = from.with_file_name(format!(
        "{file_name}.{}.reelname.tmp",
        std::process::id()
    ));

    fs::rename(from, &temp)
        .with_context(|| format!("Failed to rename {} to temp", from.display()))?;

    if let Err(e) = fs::rename(&temp, to) {
        return Err(restore_from_temp(&temp, from, to, e));
    }

    Ok(())
}

/// Put the file back under its original name after the second step failed.
/// The returned error also reports a failed restore and where the file is left.
fn restore_from_temp(temp: &Path, from: &Path, to: &Path, err: io::Error) -> anyhow::Error {
    let err = anyhow::Error::new(err).context(format!("Failed to rename temp to {}", to.display()));
    match fs::rename(temp, from) {
        Ok(()) => err,
        Err(restore) => err.context(format!(
            "Restoring {} also failed ({restore}); file left at {}",
            from.display(),
            temp.display()
        )),
    }
}

/// Dangling symlinks count as present.
fn exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

fn has_exact_entry(directory: &Path, name: &str) -> io::Result<bool> {
    for dir_entry in fs::read_dir(directory)? {
        if dir_entry?.file_name() == name {
            return Ok(true);
        }
    }
    Ok(false)
}
