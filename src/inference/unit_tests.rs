use super::infer_required_names;
use crate::error::InferenceError;

fn names(declaration: &str) -> Vec<String> {
    infer_required_names(declaration)
        .unwrap_or_else(|e| panic!("{:?} should parse: {}", declaration, e))
}

#[test]
fn test_function_expression() {
    assert_eq!(names("function($, test, secret) { foo = 'quux'; }"), vec!["$", "test", "secret"]);
}

#[test]
fn test_named_function() {
    assert_eq!(names("function init(router, store) {}"), vec!["router", "store"]);
}

#[test]
fn test_generator_and_async_functions() {
    assert_eq!(names("function* gen(a) {}"), vec!["a"]);
    assert_eq!(names("async function load(a, b) { await a; }"), vec!["a", "b"]);
}

#[test]
fn test_parenthesized_arrow() {
    assert_eq!(names("($, test) => { foo = 'foobar'; }"), vec!["$", "test"]);
}

#[test]
fn test_single_parameter_arrow() {
    assert_eq!(names("test => { foo = test; }"), vec!["test"]);
    assert_eq!(names("$ => 1"), vec!["$"]);
}

#[test]
fn test_async_arrows() {
    assert_eq!(names("async (a) => a"), vec!["a"]);
    assert_eq!(names("async a => a"), vec!["a"]);
    // `async` is also a legal parameter name.
    assert_eq!(names("async => 0"), vec!["async"]);
    assert_eq!(names("asyncx => 0"), vec!["asyncx"]);
}

#[test]
fn test_method_shorthand() {
    assert_eq!(names("boot(config, logger) { return 1; }"), vec!["config", "logger"]);
}

#[test]
fn test_zero_parameters() {
    assert!(names("() => { foo = 'grault'; }").is_empty());
    assert!(names("function () {}").is_empty());
}

#[test]
fn test_whitespace_is_trimmed() {
    assert_eq!(
        names("function (\n  first ,\t second\u{A0}, \u{FEFF}third ) {}"),
        vec!["first", "second", "third"]
    );
    assert_eq!(names("  (a,b,)  =>  a"), vec!["a", "b"]);
}

#[test]
fn test_unicode_identifiers() {
    assert_eq!(names("(größe, _x) => 0"), vec!["größe", "_x"]);
}

#[test]
fn test_rejects_non_callables() {
    for text in &["not-a-function-or-list", "'test'", "", "42", "function", "a, b"] {
        match infer_required_names(text) {
            Err(InferenceError::NotCallable(_)) => {}
            other => panic!("{:?} should be rejected, got {:?}", text, other),
        }
    }
}

#[test]
fn test_rejects_unsupported_parameter_forms() {
    for text in &[
        "(a = 1) => a",
        "(...rest) => rest",
        "({ a, b }) => a",
        "function([a, b]) {}",
    ] {
        assert!(infer_required_names(text).is_err(), "{:?} should be rejected", text);
    }
}
