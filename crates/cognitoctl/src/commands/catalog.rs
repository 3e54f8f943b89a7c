//! The `commands` listing

use cognitoctl_core::CommandDescriptor;
use cognitoctl_core::operations::{descriptors, find_descriptor};
use comfy_table::Table;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result as CliResult;
use crate::output;

#[derive(Debug, Serialize)]
struct CatalogEntry {
    command: String,
    operation: &'static str,
    alias: Option<String>,
    mutating: bool,
    pipeline: &'static str,
    output: String,
    pass_thru: Option<&'static str>,
}

impl From<&CommandDescriptor> for CatalogEntry {
    fn from(d: &CommandDescriptor) -> Self {
        let command = d.command_name();
        let alias = Some(d.operation_alias()).filter(|alias| *alias != command);
        Self {
            command,
            operation: d.operation,
            alias,
            mutating: d.requires_confirmation(),
            pipeline: d.pipeline_param,
            output: d.output.to_string(),
            pass_thru: d.pass_thru,
        }
    }
}

fn entries(filter: Option<&str>) -> Vec<CatalogEntry> {
    // An exact command, alias or operation name selects just that entry
    if let Some(descriptor) = filter.and_then(find_descriptor) {
        return vec![CatalogEntry::from(&descriptor)];
    }

    let filter = filter.map(str::to_lowercase);
    descriptors()
        .iter()
        .map(CatalogEntry::from)
        .filter(|entry| match &filter {
            Some(f) => {
                entry.command.contains(f.as_str())
                    || entry.operation.to_lowercase().contains(f.as_str())
            }
            None => true,
        })
        .collect()
}

pub fn handle_catalog(
    filter: Option<&str>,
    output_format: OutputFormat,
    query: Option<&str>,
) -> CliResult<()> {
    let entries = entries(filter);

    match output_format {
        OutputFormat::Auto | OutputFormat::Table if query.is_none() => {
            let mut table = Table::new();
            table.set_header(vec!["Command", "Operation", "Output", "Pipeline"]);
            for entry in &entries {
                let output = match entry.pass_thru {
                    Some(param) => format!("- (pass-thru {param})"),
                    None => entry.output.clone(),
                };
                table.add_row(vec![
                    entry.command.clone(),
                    entry.operation.to_string(),
                    output,
                    entry.pipeline.to_string(),
                ]);
            }
            println!("{table}");
        }
        format => output::print_output(&entries, format.into(), query)?,
    }
    Ok(())
}
