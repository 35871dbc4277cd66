//! CLI wrapper for the payload loader.
//!
//! Usage:
//!   payload <file>              # Run a payload script
//!   payload -e "line"           # Run a single script line
//!   payload                     # Start REPL (interactive mode)

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use payload::ambient::ProcessEnv;
use payload::config::LoaderConfig;
use payload::script::Interpreter;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "payload", version, about = "Dependency-gated module loader")]
struct Cli {
    /// Script file to run.
    file: Option<PathBuf>,

    /// Run a single script line.
    #[arg(short = 'e', long = "eval", conflicts_with = "file")]
    eval: Option<String>,

    /// Configuration file (defaults to $PAYLOAD_CONFIG, then ./payload.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Expose process environment variables as ambient bindings.
    #[arg(long)]
    env: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("payload=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => LoaderConfig::load(path),
        None => LoaderConfig::discover(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {}", e);
            process::exit(1);
        }
    };

    let mut interpreter = Interpreter::new(&config);
    if cli.env {
        interpreter.add_namespace(Box::new(ProcessEnv::new()));
    }

    match (&cli.file, &cli.eval) {
        (Some(file), _) => run_file(&mut interpreter, file),
        (None, Some(line)) => eval_line(&mut interpreter, line),
        (None, None) => run_repl(&mut interpreter),
    }
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

fn run_file(interpreter: &mut Interpreter, filename: &Path) {
    let source = match fs::read_to_string(filename) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", filename.display(), e);
            process::exit(1);
        }
    };

    match interpreter.run_source(&source) {
        Ok(lines) => print_lines(lines),
        Err(e) => {
            eprintln!("Parse error: {}", e);
            process::exit(1);
        }
    }
}

fn eval_line(interpreter: &mut Interpreter, line: &str) {
    match interpreter.run_line(line, 1) {
        Ok(lines) => print_lines(lines),
        Err(e) => {
            eprintln!("Parse error: {}", e);
            process::exit(1);
        }
    }
}

fn run_repl(interpreter: &mut Interpreter) {
    println!("payload v{} - dependency-gated module loader", env!("CARGO_PKG_VERSION"));
    println!("Type script commands and press Enter. Type .exit to quit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line_no = 0;

    loop {
        print!("> ");
        if let Err(e) = stdout.flush() {
            eprintln!("Error writing prompt: {}", e);
            break;
        }

        let mut input = String::new();
        match stdin.read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
        line_no += 1;

        let input = input.trim();
        if input == ".exit" || input == ".quit" {
            break;
        }
        if input.is_empty() {
            continue;
        }

        match interpreter.run_line(input, line_no) {
            Ok(lines) => print_lines(lines),
            Err(e) => eprintln!("Parse error: {}", e),
        }
    }

    let waiting = interpreter.loader().pending_count();
    if waiting > 0 {
        println!("{} module(s) never ran", waiting);
    }
    println!("Goodbye!");
}
