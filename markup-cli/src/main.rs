// Command-line interface for markup
//
// This binary is a thin shell around the markup-builder library: it imports HTML files into the
// node model, and either renders them back in canonical form or compares two of them.
//
// Usage:
//  markup normalize <input> [-o <file>] [--scope body|root] [--keep-blank-text]
//  markup compare <left> <right> [--scope body|root] [--keep-blank-text]
//
// Configuration:
//
// Settings come from the built-in defaults, then ./markup.toml when present, then the file given
// with --config, then MARKUP_<SECTION>__<KEY> environment variables, then command line flags.
// See markup-config/defaults/markup.default.toml.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use markup_builder::{render_nodes, Fragment, ImportOptions, MarkupError, Node};
use markup_config::{Loader, MarkupConfig};
use std::fs;
use tracing::{debug, info, Level};

const IMPORT_SCOPES: &[&str] = &["body", "root"];

fn import_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("scope")
                .long("scope")
                .help("Part of the document to import (overrides import.scope)")
                .long_help(
                    "Part of the parsed document to import.\n\n\
                    body: the children of <body> (default)\n\
                    root: the root <html> element, including <head>"
                )
                .value_parser(clap::builder::PossibleValuesParser::new(IMPORT_SCOPES))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("keep-blank-text")
                .long("keep-blank-text")
                .help("Keep whitespace-only text nodes (overrides import.keep_blank_text)")
                .action(ArgAction::SetTrue),
        )
}

fn build_cli() -> Command {
    Command::new("markup")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize and compare HTML documents")
        .long_about(
            "markup imports HTML documents into a structural tree and renders them back\n\
            in a canonical form: attributes sorted by name, no formatting added.\n\n\
            Examples:\n  \
            markup normalize page.html              # Canonical HTML on stdout\n  \
            markup normalize page.html -o out.html  # Write to a file\n  \
            markup compare a.html b.html            # Exit 0 when structurally equal"
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a markup.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more (repeat for debug and trace output)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(import_args(
            Command::new("normalize")
                .about("Import an HTML file and render it canonically")
                .arg(
                    Arg::new("input")
                        .help("Input file path")
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
        ))
        .subcommand(import_args(
            Command::new("compare")
                .about("Check whether two HTML files import to equal trees")
                .long_about(
                    "Import both files and compare the resulting trees.\n\n\
                    Prints 'equal' and exits 0 when the trees are structurally equal,\n\
                    prints 'different' and exits 1 otherwise. Attribute order and\n\
                    formatting whitespace between tags do not matter."
                )
                .arg(
                    Arg::new("left")
                        .help("First file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("right")
                        .help("Second file")
                        .required(true)
                        .index(2)
                        .value_hint(ValueHint::FilePath),
                ),
        ))
}

fn main() {
    let matches = build_cli().get_matches();

    init_logging(matches.get_count("verbose"));

    let Some((name, sub_matches)) = matches.subcommand() else {
        eprintln!("Unknown subcommand. Use --help for usage information.");
        std::process::exit(1);
    };

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        sub_matches,
    );

    match name {
        "normalize" => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_normalize_command(input, output, &config);
        }
        "compare" => {
            let left = sub_matches
                .get_one::<String>("left")
                .expect("left is required");
            let right = sub_matches
                .get_one::<String>("right")
                .expect("right is required");
            handle_compare_command(left, right, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .ok();
}

fn load_cli_config(explicit_path: Option<&str>, sub_matches: &ArgMatches) -> MarkupConfig {
    let loader = Loader::new().with_optional_file("markup.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    let scope = sub_matches.get_one::<String>("scope").map(|s| s.as_str());
    let keep_blank_text = sub_matches.get_flag("keep-blank-text");

    loader
        .with_environment()
        .with_import_flags(scope, keep_blank_text)
        .and_then(Loader::build)
        .unwrap_or_else(|err| {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(1);
        })
}

/// Read and import one file with the configured options.
fn import_file(path: &str, config: &MarkupConfig) -> Result<Vec<Node>, MarkupError> {
    let bytes = fs::read(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });
    let encoding = config.import.encoding()?;
    let options = ImportOptions::from(&config.import);
    let fragment = Fragment::import(&bytes, encoding, &options)?;
    info!(path, nodes = fragment.len(), "imported file");
    Ok(fragment.into_inner())
}

fn import_or_exit(path: &str, config: &MarkupConfig) -> Vec<Node> {
    import_file(path, config).unwrap_or_else(|err| {
        eprintln!("Error importing '{path}': {err}");
        std::process::exit(1);
    })
}

fn handle_normalize_command(input: &str, output: Option<&str>, config: &MarkupConfig) {
    let nodes = import_or_exit(input, config);
    let rendered = render_nodes(&nodes, &config.render.separator);
    debug!(bytes = rendered.len(), "rendered canonical html");

    match output {
        Some(path) => {
            fs::write(path, rendered.into_bytes()).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => println!("{rendered}"),
    }
}

fn handle_compare_command(left: &str, right: &str, config: &MarkupConfig) {
    let left_nodes = import_or_exit(left, config);
    let right_nodes = import_or_exit(right, config);

    if left_nodes == right_nodes {
        println!("equal");
    } else {
        println!("different");
        std::process::exit(1);
    }
}
