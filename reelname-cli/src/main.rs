use anyhow::Result;
use clap::{CommandFactory, Parser};
use reelname_core::{Config, OutputFormatter, RenameError, VersionResult};
use std::io::{self, IsTerminal};
use std::path::Path;
use std::process;

mod apply;
mod cli;
mod list;

use cli::{Cli, Commands, OutputFormat};

/// Exit status when at least one entry failed to rename.
const EXIT_FAILED_ENTRIES: i32 = 1;
/// Exit status when the batch was aborted before any rename.
const EXIT_ABORTED: i32 = 2;
const EXIT_INTERNAL: i32 = 3;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Apply {
            directory,
            dry_run,
            log_file,
            output,
            quiet,
        } => {
            let config = load_config();
            let use_color = use_color(cli.no_color, &config);
            let directory = config.resolve_directory(directory.as_deref());
            let log_file = config.resolve_log_file(log_file.as_deref());
            apply::handle_apply(directory, dry_run, log_file, output, quiet, use_color).map(
                |success| {
                    if success {
                        0
                    } else {
                        EXIT_FAILED_ENTRIES
                    }
                },
            )
        },

        Commands::List { directory, output } => {
            let config = load_config();
            let use_color = use_color(cli.no_color, &config);
            let directory = directory.or_else(|| config.defaults.directory.clone());
            list::handle_list(directory.as_deref(), output, use_color).map(|()| 0)
        },

        Commands::Version { output } => handle_version(output).map(|()| 0),

        Commands::Completions { shell, out_dir } => {
            let mut cmd = Cli::command();
            let generated = match out_dir {
                Some(dir) => generate_completions(shell, &mut cmd, "reelname", &dir),
                None => {
                    clap_complete::generate(shell, &mut cmd, "reelname", &mut io::stdout());
                    Ok(())
                },
            };
            generated.map(|()| 0)
        },
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code_for(&e));
        },
    }
}

/// Only commands that touch the video directory read the config file; a
/// malformed one aborts them.
fn load_config() -> Config {
    Config::load().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        process::exit(EXIT_ABORTED);
    })
}

fn use_color(no_color: bool, config: &Config) -> bool {
    !no_color
        && config
            .defaults
            .use_color
            .unwrap_or_else(|| io::stdout().is_terminal())
}

/// Problems with the video directory abort the batch; anything else is internal.
fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<RenameError>().is_some() {
        EXIT_ABORTED
    } else {
        EXIT_INTERNAL
    }
}

// Generate shell completions
pub fn generate_completions<G: clap_complete::Generator>(
    gen: G,
    cmd: &mut clap::Command,
    name: &str,
    out_dir: &Path,
) -> Result<()> {
    use clap_complete::generate_to;
    use std::fs;

    fs::create_dir_all(out_dir)?;
    let path = generate_to(gen, cmd, name, out_dir)?;
    println!("Generated completion file: {}", path.display());
    Ok(())
}

fn handle_version(output: OutputFormat) -> Result<()> {
    let version_result = VersionResult {
        name: "reelname".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    println!("{}", version_result.format(output.into()));
    Ok(())
}
