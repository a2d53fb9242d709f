//! Command-line interface for scenario
//! This binary lexes scenario scripts and prints the token stream in one of the registered formats.
//!
//! Usage:
//!   scenario `<path>` [--format `<format>`] [--encoding `<encoding>`] [--config `<file>`]
//!   scenario --list-formats                                  - List all available formats

use clap::{Arg, ArgAction, Command};
use scenario::scenario::config::{Loader, ScenarioConfig};
use scenario::scenario::formats::FormatRegistry;
use scenario::scenario::lexing::tokenize;
use scenario::scenario::source::decoder_for;
use std::path::Path;

fn main() {
    let matches = Command::new("scenario")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting scenario script token streams")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the scenario script")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'token-simple', 'token-json', 'detokenized')"),
        )
        .arg(
            Arg::new("encoding")
                .long("encoding")
                .short('e')
                .help("Encoding of the script file (default: utf-8)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(
        matches.get_one::<String>("config"),
        matches.get_one::<String>("format"),
        matches.get_one::<String>("encoding"),
    )
    .unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    scenario::init_tracing(&config.logging.filter);

    let Some(path) = matches.get_one::<String>("path") else {
        eprintln!("A script path is required");
        std::process::exit(1);
    };
    handle_lex_command(path, &config);
}

fn load_config(
    file: Option<&String>,
    format: Option<&String>,
    encoding: Option<&String>,
) -> Result<ScenarioConfig, config::ConfigError> {
    let mut loader = Loader::new(file.map(Path::new));
    if let Some(format) = format {
        loader = loader.output_format(format)?;
    }
    if let Some(encoding) = encoding {
        loader = loader.input_encoding(encoding)?;
    }
    loader.build()
}

/// Handle lexing a script file
fn handle_lex_command(path: &str, config: &ScenarioConfig) {
    let bytes = std::fs::read(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let decoder = decoder_for(&config.input.encoding).unwrap_or_else(|| {
        eprintln!("Unsupported encoding '{}'", config.input.encoding);
        std::process::exit(1);
    });
    let source = decoder.decode(&bytes);

    let tokens = tokenize(&source).unwrap_or_else(|e| {
        let (line, column) = e.line_column(&source);
        eprintln!("{}:{}:{}: {}", path, line, column, e);
        std::process::exit(1);
    });

    let registry = FormatRegistry::with_defaults();
    let output = registry
        .serialize(&tokens, &config.output.format)
        .unwrap_or_else(|e| {
            eprintln!("{}", e);
            eprintln!("Available formats: {}", registry.list_formats().join(", "));
            std::process::exit(1);
        });

    print!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        println!("  {}", name);
        if let Some(formatter) = registry.get(name) {
            println!("    {}", formatter.description());
        }
        println!();
    }
}
