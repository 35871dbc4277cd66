//! Pest front end for callback declaration headers.

use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use tracing::debug;

use crate::error::InferenceError;

#[derive(Parser)]
#[grammar = "inference/signature.pest"] // relative to src
pub struct SignatureParser;

/// Derive the required dependency names from a callback's declaration text.
///
/// Names come back in declaration order, trimmed. A callback declared with no
/// parameters yields an empty list.
pub fn infer_required_names(declaration: &str) -> Result<Vec<String>, InferenceError> {
    let pairs = SignatureParser::parse(Rule::declaration, declaration).map_err(|e| {
        debug!(error = %e, "declaration rejected by signature grammar");
        InferenceError::NotCallable(declaration.trim().to_string())
    })?;

    let mut names = vec![];
    for pair in pairs {
        collect_parameters(pair, &mut names);
    }
    Ok(names)
}

fn collect_parameters(pair: Pair<Rule>, names: &mut Vec<String>) {
    match pair.as_rule() {
        Rule::param_list | Rule::single_param => {
            names.extend(pair.into_inner().map(|id| id.as_str().to_string()));
        }
        Rule::declaration | Rule::function_decl | Rule::arrow_decl | Rule::method_decl => {
            for inner in pair.into_inner() {
                collect_parameters(inner, names);
            }
        }
        _ => { /* Keywords, names and bodies carry no parameters */ }
    }
}
