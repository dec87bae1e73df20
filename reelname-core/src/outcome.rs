use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What happened to one rename entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EntryOutcome {
    /// The file now lives under its new name (or would, in a dry run)
    Renamed { from: String, to: String },
    /// The entry maps a present file onto its own name
    Unchanged { name: String },
    /// The original file was not in the directory
    Skipped { from: String },
    /// The rename was refused or the filesystem rejected it
    Failed {
        from: String,
        to: String,
        reason: String,
    },
}

impl EntryOutcome {
    /// Progress line for this outcome.
    pub fn message(&self, dry_run: bool) -> String {
        match self {
            Self::Renamed { from, to } if dry_run => format!("Would rename '{from}' to '{to}'"),
            Self::Renamed { from, to } => format!("Renaming '{from}' to '{to}'"),
            Self::Unchanged { name } => {
                format!("File '{name}' already has the target name. Nothing to do.")
            },
            Self::Skipped { from } => format!("File '{from}' not found! Skipping..."),
            Self::Failed { from, to, reason } => {
                format!("Failed to rename '{from}' to '{to}': {reason}")
            },
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Aggregated result of one pass over a mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub directory: PathBuf,
    pub dry_run: bool,
    pub outcomes: Vec<EntryOutcome>,
}

impl RunSummary {
    pub fn renamed(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Renamed { .. }))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Unchanged { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(EntryOutcome::is_failure)
    }

    /// A run succeeds when no entry failed. Skips do not count against it.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Final line printed after every entry has been processed.
    pub fn completion_message(&self) -> String {
        let heading = if self.dry_run {
            "Dry run complete!"
        } else {
            "Renaming complete!"
        };
        format!(
            "{heading} {} renamed, {} unchanged, {} skipped, {} failed",
            self.renamed(),
            self.unchanged(),
            self.skipped(),
            self.failed()
        )
    }

    fn count(&self, pred: impl Fn(&EntryOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(dry_run: bool) -> RunSummary {
        RunSummary {
            directory: PathBuf::from("videos"),
            dry_run,
            outcomes: vec![
                EntryOutcome::Renamed {
                    from: "a.mp4".to_string(),
                    to: "b.mp4".to_string(),
                },
                EntryOutcome::Skipped {
                    from: "c.mp4".to_string(),
                },
                EntryOutcome::Skipped {
                    from: "d.mp4".to_string(),
                },
                EntryOutcome::Unchanged {
                    name: "e.mp4".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_messages() {
        let renamed = EntryOutcome::Renamed {
            from: "a.mp4".to_string(),
            to: "b.mp4".to_string(),
        };
        assert_eq!(renamed.message(false), "Renaming 'a.mp4' to 'b.mp4'");
        assert_eq!(renamed.message(true), "Would rename 'a.mp4' to 'b.mp4'");

        let skipped = EntryOutcome::Skipped {
            from: "a.mp4".to_string(),
        };
        assert_eq!(skipped.message(false), "File 'a.mp4' not found! Skipping...");

        let failed = EntryOutcome::Failed {
            from: "a.mp4".to_string(),
            to: "b.mp4".to_string(),
            reason: "target 'b.mp4' already exists".to_string(),
        };
        assert_eq!(
            failed.message(false),
            "Failed to rename 'a.mp4' to 'b.mp4': target 'b.mp4' already exists"
        );
        assert!(failed.is_failure());
    }

    #[test]
    fn test_counts_and_completion() {
        let s = summary(false);
        assert_eq!(s.renamed(), 1);
        assert_eq!(s.skipped(), 2);
        assert_eq!(s.unchanged(), 1);
        assert_eq!(s.failed(), 0);
        assert!(s.is_success());
        assert_eq!(
            s.completion_message(),
            "Renaming complete! 1 renamed, 1 unchanged, 2 skipped, 0 failed"
        );
        assert!(summary(true)
            .completion_message()
            .starts_with("Dry run complete!"));
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(EntryOutcome::Skipped {
            from: "a.mp4".to_string(),
        })
        .unwrap();
        assert_eq!(json["status"], "skipped");
        assert_eq!(json["from"], "a.mp4");
    }
}
