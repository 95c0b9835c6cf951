//! Output formatting module

mod json;
mod text;

use clap::ValueEnum;
use esqlwalk_ast::{Command, Function, Literal};
use miette::Result;
use serde::Deserialize;

use crate::report::Report;
use crate::trace::TraceEvent;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn output_commands(commands: &[&Command<'_>], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_commands(commands),
        OutputFormat::Text => {
            text::output_commands(commands);
            Ok(())
        }
    }
}

pub fn output_params(params: &[&Literal<'_>], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_params(params),
        OutputFormat::Text => {
            text::output_params(params);
            Ok(())
        }
    }
}

/// Prints a matched function. The function is always printed as JSON; the
/// text format adds nothing a reader could not get from the node itself.
pub fn output_function(function: &Function<'_>) -> Result<()> {
    json::output_function(function)
}

pub fn output_has_function(found: bool, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_has_function(found),
        OutputFormat::Text => {
            println!("{found}");
            Ok(())
        }
    }
}

pub fn output_trace(events: &[TraceEvent<'_>], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_trace(events),
        OutputFormat::Text => {
            text::output_trace(events);
            Ok(())
        }
    }
}

pub fn output_report(report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_report(report),
        OutputFormat::Text => {
            text::output_report(report);
            Ok(())
        }
    }
}
