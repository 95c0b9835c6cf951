//! Summary report over one tree

use esqlwalk_ast::{AstNode, commands, has_function, params};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionPresence {
    pub name: String,
    pub found: bool,
}

/// Command and parameter counts plus the presence of configured functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub commands: usize,
    pub params: usize,
    pub functions: Vec<FunctionPresence>,
}

impl Report {
    pub fn build(root: Option<AstNode<'_>>, functions: &[String]) -> Self {
        Self {
            commands: commands(root).len(),
            params: params(root).len(),
            functions: functions
                .iter()
                .map(|name| FunctionPresence {
                    name: name.clone(),
                    found: has_function(root, name),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esqlwalk_ast::{AstArena, Column, Command, Function, Literal};
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_and_checks_functions() {
        let arena = AstArena::new();
        let cpu = arena.alloc(Column::new("cpu"));
        let param = arena.alloc(Literal::param("?1"));
        let avg = arena.alloc(Function::new(
            "avg",
            arena.alloc_slice_copy(&[cpu.into(), param.into()]),
        ));
        let stats = arena.alloc(Command::new("stats", arena.alloc_slice_copy(&[avg.into()])));

        let report = Report::build(
            Some(AstNode::from(stats)),
            &["avg".to_string(), "sum".to_string()],
        );

        assert_eq!(
            report,
            Report {
                commands: 1,
                params: 1,
                functions: vec![
                    FunctionPresence {
                        name: "avg".to_string(),
                        found: true,
                    },
                    FunctionPresence {
                        name: "sum".to_string(),
                        found: false,
                    },
                ],
            }
        );
    }

    #[test]
    fn absent_root_is_empty() {
        let report = Report::build(None, &["avg".to_string()]);

        assert_eq!(report.commands, 0);
        assert_eq!(report.params, 0);
        assert!(!report.functions[0].found);
    }
}
