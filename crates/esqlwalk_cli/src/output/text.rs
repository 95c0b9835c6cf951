//! Text output formatter

use esqlwalk_ast::{Command, Literal};

use crate::report::Report;
use crate::trace::TraceEvent;

pub fn output_commands(commands: &[&Command<'_>]) {
    for command in commands {
        println!(
            "{} {}:{}",
            command.name, command.location.min, command.location.max
        );
    }
}

pub fn output_params(params: &[&Literal<'_>]) {
    for param in params {
        println!("{}", param.value);
    }
}

pub fn output_trace(events: &[TraceEvent<'_>]) {
    for event in events {
        println!("{event}");
    }
}

pub fn output_report(report: &Report) {
    println!("commands: {}", report.commands);
    println!("params: {}", report.params);
    for function in &report.functions {
        let status = if function.found { "found" } else { "missing" };
        println!("function {}: {}", function.name, status);
    }
}
