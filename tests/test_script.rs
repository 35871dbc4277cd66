//! Tests for the script front end and configuration loading.

extern crate payload;

use payload::ambient::ProcessEnv;
use payload::config::LoaderConfig;
use payload::resolver::ArgumentOrder;
use payload::script::Interpreter;
use payload::ScriptError;
use std::env;
use std::io::Write;

const PAGE_SCRIPT: &str = r#"
# Modules declared before anything they need has loaded.
require widgets: function($, router) { }
require app: router, widgets_ready
require boot: () => start()

global $ = jquery
define router = "hash router"
pending
define widgets_ready = yes
registry
"#;

#[test]
fn test_page_script() {
    let mut interpreter = Interpreter::new(&LoaderConfig::default());
    let printed = interpreter.run_source(PAGE_SCRIPT).unwrap();
    assert_eq!(
        printed,
        vec![
            "widgets waiting for $, router",
            "app waiting for router, widgets_ready",
            "boot()",
            "widgets(jquery, hash router)",
            "app waiting for widgets_ready",
            "app(hash router, yes)",
            "router = hash router",
            "widgets_ready = yes",
        ]
    );
    assert_eq!(interpreter.loader().pending_count(), 0);
}

#[test]
fn test_config_file_drives_interpreter() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "argument_order = \"legacy\"\n\n[globals]\nlogger = console"
    )
    .unwrap();
    // `console` is a bare word, which TOML rejects.
    assert!(LoaderConfig::load(file.path()).is_err());

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "argument_order = \"legacy\"\n\n[globals]\nlogger = \"console\""
    )
    .unwrap();
    let config = LoaderConfig::load(file.path()).unwrap();
    assert_eq!(config.argument_order, ArgumentOrder::Legacy);

    let mut interpreter = Interpreter::new(&config);
    let printed = interpreter
        .run_source("require main: a, logger, b\ndefine b = B\ndefine a = A")
        .unwrap();
    assert_eq!(printed, vec!["main waiting for a, b", "main(console, B, A)"]);
}

#[test]
fn test_process_env_namespace() {
    env::set_var("PAYLOAD_SCRIPT_TEST_HOME", "/srv/app");
    let mut interpreter = Interpreter::new(&LoaderConfig::default());
    interpreter.add_namespace(Box::new(ProcessEnv::with_prefix("PAYLOAD_SCRIPT_TEST_")));

    let printed = interpreter.run_source("require HOME => 0").unwrap();
    assert_eq!(printed, vec!["module1(/srv/app)"]);
}

#[test]
fn test_syntax_error_reports_line() {
    let mut interpreter = Interpreter::new(&LoaderConfig::default());
    let err = interpreter
        .run_source("define a = 1\n\nrequire\n")
        .unwrap_err();
    match err {
        ScriptError::Syntax { line, .. } => assert_eq!(line, 3),
    }
}
