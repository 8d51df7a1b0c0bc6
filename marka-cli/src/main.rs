// Command-line interface for marka
//
// This binary is a thin shell over the marka-babel library: it reads a file (or stdin),
// runs one of the two conversions and writes the result to stdout or a file.
//
// Usage:
//  marka render <input> [--stream] [--delay <ms>] [--output <file>]  - Markdown → HTML
//  marka markdown <input> [--output <file>]                          - HTML → Markdown
//
// Use "-" as input to read from stdin.
//
// Mapping rule tables come from the configuration (marka.toml, --config) and can be
// overridden per invocation with --default-map / --user-map.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use futures::StreamExt;
use marka_babel::{Converter, MappingPaths, RegistryConfig};
use marka_config::{Loader, MarkaConfig};
use std::fs;
use std::io::{self, Read, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn build_cli() -> Command {
    Command::new("marka")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between the marka Markdown dialect and HTML")
        .long_about(
            "marka converts a small, mapping-driven Markdown dialect to HTML and back.\n\n\
            Commands:\n  \
            - render:   Markdown → HTML (optionally streamed line by line)\n  \
            - markdown: HTML → Markdown\n\n\
            Examples:\n  \
            marka render notes.md                      # HTML to stdout\n  \
            marka render notes.md --stream --delay 20  # Reveal one line every 20ms\n  \
            marka markdown page.html -o page.md        # HTML back to Markdown\n  \
            cat notes.md | marka render -              # Read from stdin"
        )
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a marka.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("default-map")
                .long("default-map")
                .value_name("PATH")
                .help("Override the default mapping rule file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("user-map")
                .long("user-map")
                .value_name("PATH")
                .help("Override the user mapping rule file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .about("Convert Markdown to HTML")
                .arg(
                    Arg::new("input")
                        .help("Input file path, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("stream")
                        .long("stream")
                        .help("Print the output one line at a time")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("output"),
                )
                .arg(
                    Arg::new("delay")
                        .long("delay")
                        .value_name("MS")
                        .help("Pause between streamed lines, with --stream (defaults to stream.delay_ms)")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("markdown")
                .about("Convert HTML to Markdown")
                .arg(
                    Arg::new("input")
                        .help("Input file path, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    let config = load_cli_config(&matches);
    init_logging(&config.logging.level);

    let converter = build_converter(&config);

    match matches.subcommand() {
        Some(("render", sub_matches)) => {
            handle_render_command(&converter, sub_matches, &config).await;
        }
        Some(("markdown", sub_matches)) => {
            handle_markdown_command(&converter, sub_matches).await;
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the render command (Markdown → HTML)
async fn handle_render_command(converter: &Converter, matches: &ArgMatches, config: &MarkaConfig) {
    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let source = read_input(input);

    if matches.get_flag("stream") {
        let delay = matches
            .get_one::<u64>("delay")
            .copied()
            .unwrap_or(config.stream.delay_ms);
        let lines = converter.stream(&source, delay).await;
        futures::pin_mut!(lines);

        let mut stdout = io::stdout();
        while let Some(line) = lines.next().await {
            if writeln!(stdout, "{line}")
                .and_then(|_| stdout.flush())
                .is_err()
            {
                // Reader went away; stop pulling lines.
                return;
            }
        }
        return;
    }

    let html = converter.convert(&source).await;
    write_output(matches.get_one::<String>("output").map(|s| s.as_str()), &html);
}

/// Handle the markdown command (HTML → Markdown)
async fn handle_markdown_command(converter: &Converter, matches: &ArgMatches) {
    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let source = read_input(input);

    let markdown = converter.html_to_markdown(&source).await;
    write_output(
        matches.get_one::<String>("output").map(|s| s.as_str()),
        &markdown,
    );
}

fn build_converter(config: &MarkaConfig) -> Converter {
    let sources = RegistryConfig::from(&config.mappings);
    debug!(default_map = %sources.default_map, user_map = %sources.user_map, "mapping sources");
    Converter::from_config(sources)
}

/// Layers marka.toml, an explicit --config file and the mapping flags, in that order.
fn load_cli_config(matches: &ArgMatches) -> MarkaConfig {
    let loader = Loader::new().with_optional_file("marka.toml");
    let loader = match matches.get_one::<String>("config") {
        Some(path) => loader.with_file(path),
        None => loader,
    };
    let overrides = MappingPaths {
        default_map: matches.get_one::<String>("default-map").cloned(),
        user_map: matches.get_one::<String>("user-map").cloned(),
    };

    loader
        .with_mapping_overrides(&overrides)
        .and_then(Loader::build)
        .unwrap_or_else(|err| {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(1);
        })
}

/// Logs go to stderr so converted output on stdout stays clean.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn read_input(input: &str) -> String {
    if input == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source).unwrap_or_else(|e| {
            eprintln!("Error reading stdin: {e}");
            std::process::exit(1);
        });
        return source;
    }

    fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    })
}

fn write_output(output: Option<&str>, text: &str) {
    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => println!("{text}"),
    }
}
