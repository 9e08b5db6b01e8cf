//! Command-line interface for sbnf
//! Compiles an SBNF file and prints the resulting specification table.
//!
//! Usage:
//!   sbnf `<path>` [--format `<format>`] [--config `<file>`] [--set key=value]... [--no-builtins] [--check]

use clap::{Arg, ArgAction, ArgMatches, Command};
use sbnf::sbnf::compiler::{compile_with, CompileOptions};
use sbnf::sbnf::formats::render_table;
use sbnf_config::{Loader, OutputFormat, SbnfConfig};
use std::fs;
use std::process;

fn main() {
    pretty_env_logger::init();

    let matches = Command::new("sbnf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile SBNF grammar definitions")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the SBNF file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: json, yaml, sbnf or debug (default from config)"),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .value_name("KEY=VALUE")
                .help("Override a configuration key, e.g. diagnostics.context_lines=4")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("no-builtins")
                .long("no-builtins")
                .help("Do not declare EOF, WS, SPACES and NEWLINE")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Only report errors, print nothing on success")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    });

    let Some(path) = matches.get_one::<String>("path") else {
        eprintln!("Missing input path");
        process::exit(1);
    };
    let format = match matches.get_one::<String>("format") {
        Some(name) => OutputFormat::from_name(name).unwrap_or_else(|| {
            eprintln!("Unknown format '{}'", name);
            eprintln!("Available formats: json, yaml, sbnf, debug");
            process::exit(1);
        }),
        None => config.output.format,
    };

    handle_compile_command(path, format, &config, matches.get_flag("check"));
}

fn load_config(matches: &ArgMatches) -> Result<SbnfConfig, String> {
    let mut loader = Loader::new();
    if let Some(file) = matches.get_one::<String>("config") {
        loader = loader.with_file(file);
    }
    loader = loader.with_environment();
    for setting in matches.get_many::<String>("set").into_iter().flatten() {
        loader = loader.with_setting(setting).map_err(|e| e.to_string())?;
    }
    if matches.get_flag("no-builtins") {
        loader = loader
            .set_override("compile.register_builtins", false)
            .map_err(|e| e.to_string())?;
    }
    loader.build().map_err(|e| e.to_string())
}

/// Compile, resolve and print one file
fn handle_compile_command(path: &str, format: OutputFormat, config: &SbnfConfig, check: bool) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Cannot read {}: {}", path, e);
        process::exit(1);
    });

    let options = CompileOptions::from(&config.compile);
    let table = compile_with(&source, &options).unwrap_or_else(|diagnostics| {
        let total = diagnostics.len();
        let shown = diagnostics.truncated(config.diagnostics.max_reported);
        eprint!("{}", shown.render(&source, config.diagnostics.context_lines));
        if shown.len() < total {
            eprintln!("... and {} more", total - shown.len());
        }
        eprintln!("{}: {} compile error(s)", path, total);
        process::exit(1);
    });

    let unresolved = table.resolve();
    if !unresolved.is_empty() {
        for error in &unresolved {
            eprintln!("error[resolve] {}", error);
        }
        eprintln!("{}: {} resolution error(s)", path, unresolved.len());
        process::exit(1);
    }

    if check {
        return;
    }

    match render_table(&table, format) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error formatting output: {}", e);
            process::exit(1);
        }
    }
}
