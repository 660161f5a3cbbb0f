// Command-line interface for mdwriter
//
// This binary converts the mdwriter tag syntax into Markdown and inspects existing Markdown files.
// The translation and statistics logic lives in mdwriter-babel; this crate only reads and writes
// files, applies configuration and prints.
//
// Usage:
//  mdwriter <input> [-o <file>] [--save]                - Convert tag syntax to markdown (default)
//  mdwriter convert [<input>|-] [-o <file>] [--save]   - Same as above (explicit, stdin when no input)
//  mdwriter stats <input> [-f <fmt>] [-o <file>] [--save] - Markdown statistics report
//  mdwriter preview <input> [--lines <n>]               - Highlighted head of a markdown file
//  mdwriter guide                                       - Supported tags
//  mdwriter --list-formats                              - List report formats
//
// Diagnostics for lines that could not be converted go to stderr; the converted markdown goes to
// stdout unless an output file is requested, highlighted when stdout is a terminal.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use mdwriter_babel::preview::preview;
use mdwriter_babel::{
    analyze, generate_report, parse_document, stats_report_filename, ReportRegistry, TagTable,
};
use mdwriter_cli::display;
use mdwriter_config::{Loader, MdWriterConfig, LOCAL_CONFIG_FILE};
use std::fs;
use std::io::{self, IsTerminal};
use std::path::Path;

/// Input argument that stands for stdin.
const STDIN_INPUT: &str = "-";

const SUBCOMMANDS: &[&str] = &["convert", "stats", "preview", "guide", "help"];

fn build_cli() -> Command {
    Command::new("mdwriter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert tag syntax to Markdown and analyze Markdown files")
        .long_about(
            "mdwriter turns lines like `AAA(Title)` into Markdown and reports statistics\n\
            about existing Markdown files.\n\n\
            Commands:\n  \
            - convert: Translate a tag syntax file into Markdown (default)\n  \
            - stats:   Word, heading, list, link and formatting statistics\n  \
            - preview: Show the first lines of a Markdown file, highlighted\n  \
            - guide:   List the supported tags\n\n\
            Examples:\n  \
            mdwriter notes.tags                     # Convert to markdown (stdout)\n  \
            mdwriter notes.tags --save              # Save as <first tag>.md\n  \
            mdwriter stats README.md --format json  # JSON statistics\n  \
            mdwriter preview README.md --lines 10   # First 10 lines",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available report formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mdwriter.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .value_name("WHEN")
                .help("When to use colors")
                .value_parser(["auto", "always", "never"])
                .default_value("auto")
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert tag syntax to Markdown (default command)")
                .long_about(
                    "Translate every `PREFIX(content)` line of the input into Markdown.\n\n\
                    Lines that cannot be translated are reported on stderr and skipped.\n\
                    If no line can be translated the command fails.\n\n\
                    Output goes to stdout by default. Use -o to pick a file, or --save to\n\
                    write <first tag>.md into the configured output directory.\n\n\
                    Examples:\n  \
                    mdwriter convert notes.tags                 # Markdown on stdout\n  \
                    mdwriter convert notes.tags -o notes.md     # Write notes.md\n  \
                    mdwriter notes.tags --save                  # 'convert' is optional\n  \
                    echo 'AAA(Title)' | mdwriter convert        # Read tags from stdin",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path ('-' or none reads stdin)")
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .conflicts_with("save")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("save")
                        .long("save")
                        .help("Save as <first tag>.md in the configured output directory")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("stats")
                .about("Show statistics for a Markdown file")
                .long_about(
                    "Analyze a Markdown file: words, paragraphs, headings per level, list\n\
                    items, quotes, code fences, links, images and the share of formatting\n\
                    characters.\n\n\
                    Examples:\n  \
                    mdwriter stats README.md                 # Console report\n  \
                    mdwriter stats README.md --format json   # JSON report on stdout\n  \
                    mdwriter stats README.md -o report.json  # Format follows the extension\n  \
                    mdwriter stats README.md --save          # Also write README-stats.json",
                )
                .arg(
                    Arg::new("input")
                        .help("Markdown file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Report format (defaults to the output extension, then report.format)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write the report to a file instead of stdout")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("save")
                        .long("save")
                        .help("Write a JSON report to <basename>-stats.json")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("preview")
                .about("Preview the first lines of a Markdown file")
                .arg(
                    Arg::new("input")
                        .help("Markdown file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("lines")
                        .long("lines")
                        .short('n')
                        .help("Number of lines to show (defaults to preview.max_lines)")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(Command::new("guide").about("List the supported tags"))
}

/// Whether `args` name a file where a subcommand is expected, so `convert` should be injected.
fn should_inject_convert(args: &[String]) -> bool {
    args.len() > 1 && !args[1].starts_with('-') && !SUBCOMMANDS.contains(&args[1].as_str())
}

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            if should_inject_convert(&args) {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    apply_color_choice(&matches);
    let highlight = should_highlight_stdout(&matches);

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    let table = config.tag_table().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches.get_one::<String>("input").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let save = sub_matches.get_flag("save");
            handle_convert_command(input, output, save, highlight, &table, &config);
        }
        Some(("stats", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let format = resolve_report_format(sub_matches, &config);
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let save = sub_matches.get_flag("save");
            handle_stats_command(input, &format, output, save);
        }
        Some(("preview", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let lines = sub_matches
                .get_one::<usize>("lines")
                .copied()
                .unwrap_or(config.preview.max_lines);
            handle_preview_command(input, lines);
        }
        Some(("guide", _)) => {
            println!("{}", display::render_guide(&table));
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(
    input: Option<&str>,
    output: Option<&str>,
    save: bool,
    highlight: bool,
    table: &TagTable,
    config: &MdWriterConfig,
) {
    let (input, source) = match input {
        Some(path) if path != STDIN_INPUT => (path, read_input(path)),
        _ => ("<stdin>", read_stdin()),
    };

    let outcome = parse_document(table, &source);
    for diagnostic in &outcome.diagnostics {
        eprintln!("{}", display::format_diagnostic(diagnostic));
    }

    if outcome.is_empty() {
        eprintln!("Error: No valid content to process in '{input}'");
        std::process::exit(1);
    }

    let markdown = outcome.markdown();
    let destination = match (output, save) {
        (Some(path), _) => Some(Path::new(path).to_path_buf()),
        (None, true) => Some(Path::new(&config.output.directory).join(outcome.suggested_filename())),
        (None, false) => None,
    };

    match destination {
        Some(path) => {
            write_output(&path, &markdown);
            eprintln!("File saved: {}", path.display());
        }
        None if highlight => println!("{}", display::highlight_markdown(&markdown)),
        None => println!("{markdown}"),
    }
}

/// Handle the stats command
fn handle_stats_command(input: &str, format: &str, output: Option<&str>, save: bool) {
    let source = read_input(input);
    let stats = analyze(&source);

    let report = generate_report(&stats, format).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    match output {
        Some(path) => {
            write_output(Path::new(path), &report);
            eprintln!("Report saved: {path}");
        }
        None if format == "console" => println!("{}", display::highlight_report(&report)),
        None => println!("{report}"),
    }

    if save {
        let json = if format == "json" {
            report
        } else {
            generate_report(&stats, "json").unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            })
        };
        let path = stats_report_filename(Path::new(input));
        write_output(&path, &json);
        eprintln!("JSON report saved: {}", path.display());
    }
}

/// Handle the preview command
fn handle_preview_command(input: &str, lines: usize) {
    let source = read_input(input);
    let size = fs::metadata(input).map(|m| m.len()).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    println!("{}", display::render_preview(input, size, &preview(&source, lines)));
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Report formats:");
    let registry = ReportRegistry::default();
    for name in registry.list_formats() {
        let description = registry
            .get(&name)
            .map(|format| format.description().to_string())
            .unwrap_or_default();
        println!("  {name:<10} {description}");
    }
}

/// `--format`, else the format matching the `--output` extension, else `report.format`.
fn resolve_report_format(matches: &ArgMatches, config: &MdWriterConfig) -> String {
    if let Some(format) = matches.get_one::<String>("format") {
        return format.clone();
    }
    matches
        .get_one::<String>("output")
        .and_then(|path| ReportRegistry::default().detect_format_from_filename(path))
        .unwrap_or_else(|| config.report.format.clone())
}

fn apply_color_choice(matches: &ArgMatches) {
    match matches.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => colored::control::set_override(true),
        Some("never") => colored::control::set_override(false),
        _ => colored::control::unset_override(),
    }
}

/// Converted markdown is highlighted on a terminal, or everywhere with `--color always`.
fn should_highlight_stdout(matches: &ArgMatches) -> bool {
    match matches.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => true,
        Some("never") => false,
        _ => io::stdout().is_terminal(),
    }
}

fn read_stdin() -> String {
    log::debug!("reading stdin");
    io::read_to_string(io::stdin()).unwrap_or_else(|e| {
        eprintln!("Error reading stdin: {e}");
        std::process::exit(1);
    })
}

fn read_input(path: &str) -> String {
    log::debug!("reading {path}");
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

fn write_output(path: &Path, contents: &str) {
    log::debug!("writing {}", path.display());
    fs::write(path, contents).unwrap_or_else(|e| {
        eprintln!("Error writing file '{}': {e}", path.display());
        std::process::exit(1);
    });
}

fn load_cli_config(explicit_path: Option<&str>) -> MdWriterConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
