//! Parses one script line into a [`Command`].

use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

use crate::error::ScriptError;
use crate::loader::Dependencies;

#[derive(Parser)]
#[grammar = "script/script.pest"] // relative to src
pub struct ScriptParser;

/// One parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Global { name: String, value: String },
    Define { name: String, value: String },
    Require {
        label: Option<String>,
        dependencies: Dependencies,
    },
    Pending,
    Registry,
}

/// Parse a single line. Blank and comment-only lines yield `None`.
pub fn parse_line(text: &str, line: usize) -> Result<Option<Command>, ScriptError> {
    let mut pairs = ScriptParser::parse(Rule::line, text).map_err(|e| ScriptError::Syntax {
        line,
        message: format!("unrecognised command {:?} ({})", text.trim(), e.variant.message()),
    })?;

    let command = pairs
        .next()
        .and_then(|line_pair| line_pair.into_inner().find(|p| p.as_rule() != Rule::EOI));
    Ok(command.map(build_command))
}

fn build_command(pair: Pair<Rule>) -> Command {
    match pair.as_rule() {
        Rule::global_cmd => {
            let (name, value) = name_and_value(pair);
            Command::Global { name, value }
        }
        Rule::define_cmd => {
            let (name, value) = name_and_value(pair);
            Command::Define { name, value }
        }
        Rule::require_cmd => {
            let mut label = None;
            let mut dependencies = Dependencies::Names(vec![]);
            for inner in pair.into_inner() {
                match inner.as_rule() {
                    Rule::label => label = Some(inner.as_str().to_string()),
                    Rule::name_list => {
                        dependencies = Dependencies::names(inner.into_inner().map(|n| n.as_str()))
                    }
                    Rule::declaration => {
                        dependencies = Dependencies::inferred(inner.as_str().trim())
                    }
                    _ => { /* Do nothing */ }
                }
            }
            Command::Require {
                label,
                dependencies,
            }
        }
        Rule::pending_cmd => Command::Pending,
        Rule::registry_cmd => Command::Registry,
        rule => unreachable!("`command` only produces command rules, got {:?}", rule),
    }
}

fn name_and_value(pair: Pair<Rule>) -> (String, String) {
    let mut name = String::new();
    let mut value = String::new();
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::name => name = inner.as_str().to_string(),
            Rule::value => value = value_text(inner),
            _ => { /* Do nothing */ }
        }
    }
    (name, value)
}

fn value_text(pair: Pair<Rule>) -> String {
    match pair.into_inner().next() {
        Some(inner) if inner.as_rule() == Rule::quoted => inner
            .into_inner()
            .next()
            .map(|text| text.as_str().to_string())
            .unwrap_or_default(),
        Some(inner) => inner.as_str().to_string(),
        None => String::new(),
    }
}
