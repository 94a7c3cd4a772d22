//! Command-line interface for tagtree
//! Reads a markup file, infers its tag nesting and writes the tree in one of the
//! registered formats.
//!
//! Usage:
//!   tagtree `<input>` `<output>` [--format `<format>`] [--config `<config>`]
//!   tagtree --list-formats
//!
//! A `tagtree.toml` in the working directory is layered over the built-in
//! defaults; `--config` and `--format` take precedence over it.
//!
//! Logging goes to stderr and is controlled with `RUST_LOG` (default: warn).

use clap::{Arg, ArgAction, ArgMatches, Command};
use tagtree::tagtree::config::{Loader, TagtreeConfig};
use tagtree::tagtree::formats::FormatRegistry;
use tagtree::tagtree::processor::process_file;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let matches = Command::new("tagtree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Infers tag nesting in loose markup and renders it as an indented tree")
        .arg(
            Arg::new("input")
                .help("Path to the markup file to read")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Path to write the rendered tree to")
                .required_unless_present("list-formats")
                .index(2),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default from config: html)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    let registry = FormatRegistry::from_config(&config);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    let input = matches
        .get_one::<String>("input")
        .expect("input is required unless listing formats");
    let output = matches
        .get_one::<String>("output")
        .expect("output is required unless listing formats");

    if let Err(e) = process_file(input, output, &config.output.format, &registry) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<TagtreeConfig, config::ConfigError> {
    let mut loader = Loader::new().with_project_file(".");
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    loader.build()
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available output formats:\n");
    for name in registry.list_formats() {
        if let Some(formatter) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", formatter.description());
            println!();
        }
    }
}
