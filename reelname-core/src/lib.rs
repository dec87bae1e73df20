#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod listing;
pub mod mapping;
pub mod outcome;
pub mod output;
pub mod renamer;
pub mod run_log;

pub use config::Config;
pub use error::RenameError;
pub use listing::{list_mapping, EntryStatus, ListingRow, MappingListing};
pub use mapping::{course_mapping, RenameEntry, RenameMapping};
pub use outcome::{EntryOutcome, RunSummary};
pub use output::{OutputFormat, OutputFormatter, VersionResult};
pub use renamer::{run, run_with_progress, RenameOptions};
pub use run_log::RunLog;
