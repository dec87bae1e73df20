use anyhow::Result;
use reelname_core::{course_mapping, list_mapping, OutputFormatter};
use std::path::Path;

use crate::OutputFormat;

pub fn handle_list(directory: Option<&Path>, output: OutputFormat, use_color: bool) -> Result<()> {
    let listing = list_mapping(&course_mapping(), directory)?;

    match output {
        OutputFormat::Json => println!("{}", listing.format_json()),
        OutputFormat::Summary => print!("{}", listing.render(use_color)),
    }

    Ok(())
}
