//! JSON output formatter

use esqlwalk_ast::{Command, Function, Literal};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::report::Report;
use crate::trace::TraceEvent;

fn print_pretty(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value).into_diagnostic()?);
    Ok(())
}

pub fn output_commands(commands: &[&Command<'_>]) -> Result<()> {
    // Arguments are left out; `trace` shows the full tree.
    let output: Vec<_> = commands
        .iter()
        .map(|command| {
            serde_json::json!({
                "name": command.name,
                "text": command.text,
                "location": command.location,
            })
        })
        .collect();
    print_pretty(&output)
}

pub fn output_params(params: &[&Literal<'_>]) -> Result<()> {
    print_pretty(&params)
}

pub fn output_function(function: &Function<'_>) -> Result<()> {
    print_pretty(&function)
}

pub fn output_has_function(found: bool) -> Result<()> {
    print_pretty(&serde_json::json!({ "found": found }))
}

pub fn output_trace(events: &[TraceEvent<'_>]) -> Result<()> {
    print_pretty(&events)
}

pub fn output_report(report: &Report) -> Result<()> {
    print_pretty(report)
}
