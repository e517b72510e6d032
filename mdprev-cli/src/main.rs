// Command-line interface for mdprev
//
// This binary is the thin shell around mdprev-babel: it collects the five form fields, renders
// them and shows the result. All formatting happens in the library; nothing here decides what the
// Markdown looks like.
//
// Usage:
//  mdprev --title <t> [--tagline <t>] [--paragraph <p>] [--highlight <csv>] [--items <csv>]
//                                              - Render from flags (default command)
//  mdprev render [--input <file>] [--to <format>] [--output <file>] ...
//                                              - Same as above (explicit)
//  mdprev prompt [--to <format>] [--output <file>]
//                                              - Fill the form interactively on stdin
//  mdprev --list-formats                       - List available output formats
//
// Configuration:
//
// Defaults are embedded (see mdprev-config). ./mdprev.toml is layered on top when present, then the
// file given with --config, then every --set key=value in order.

mod prompt;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use mdprev_babel::{render_with_rules, FormatRegistry, RawInput};
use mdprev_config::{Loader, MdprevConfig, LOCAL_CONFIG_FILE};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Flags that only `render` understands; seeing one first means `render` was implied.
const RENDER_FLAGS: &[&str] = &[
    "--title",
    "--tagline",
    "--paragraph",
    "--highlight",
    "--items",
    "--input",
    "--to",
    "--output",
];

/// Short forms of render flags; the value may be attached (`-oout.html`).
const RENDER_SHORT_FLAGS: &[&str] = &["-i", "-o"];

/// The form fields as (argument id, help) pairs, shared by the flags and the input merge.
const FIELD_ARGS: &[(&str, &str)] = &[
    ("title", "Title of the summary, rendered as a level-2 heading"),
    ("tagline", "Short description, rendered as an italic level-6 heading"),
    ("paragraph", "Paragraph; every '.'-separated sentence becomes a bullet"),
    ("highlight", "Comma-separated words or phrases to bold in the paragraph"),
    ("items", "Comma-separated list items, rendered as a numbered italic list"),
];

fn output_args() -> [Arg; 2] {
    [
        Arg::new("to")
            .long("to")
            .help("Output format: markdown, html or json")
            .long_help(
                "Output format.\n\n\
                When omitted, the format is detected from the --output extension,\n\
                falling back to output.format from the configuration (markdown)."
            )
            .value_hint(ValueHint::Other),
        Arg::new("output")
            .long("output")
            .short('o')
            .help("Output file path (defaults to stdout)")
            .value_hint(ValueHint::FilePath),
    ]
}

fn build_cli() -> Command {
    let mut render = Command::new("render")
        .about("Render a form given as flags or an input file (default command)")
        .long_about(
            "Render the form fields into Markdown fragments.\n\n\
            Fields come from --input (a JSON or TOML file with title, tagline,\n\
            paragraph, highlight and items keys) and/or from flags. Flags win\n\
            over the file. Empty fields are skipped.\n\n\
            Examples:\n  \
            mdprev --title Missions --items 'Apollo, Voyager'\n  \
            mdprev render --input form.toml --to html -o preview.html\n  \
            mdprev --paragraph 'Mars is red. Venus is hot.' --highlight Mars,hot"
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .help("JSON or TOML file with the form fields")
                .value_hint(ValueHint::FilePath),
        );
    for (id, help) in FIELD_ARGS {
        render = render.arg(Arg::new(*id).long(*id).help(*help).value_hint(ValueHint::Other));
    }

    Command::new("mdprev")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn a title, tagline, paragraph and item list into Markdown")
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an mdprev.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .value_name("KEY=VALUE")
                .help("Override one configuration key, e.g. highlight.mode=substring")
                .action(ArgAction::Append)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug information to stderr")
                .action(ArgAction::SetTrue)
                .conflicts_with("quiet")
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only log errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(render.args(output_args()))
        .subcommand(
            Command::new("prompt")
                .about("Fill in the form interactively")
                .long_about(
                    "Ask for each field on the terminal, then print the preview.\n\n\
                    Prompts are written to stderr and the preview to stdout, so\n\
                    the result can be redirected:\n  \
                    mdprev prompt > preview.md"
                )
                .args(output_args()),
        )
}

/// Whether `render` must be inserted in front of the user's arguments.
fn should_inject_render(args: &[String]) -> bool {
    args.get(1).is_some_and(|first| {
        RENDER_FLAGS
            .iter()
            .any(|flag| first == flag || first.starts_with(&format!("{flag}=")))
            || RENDER_SHORT_FLAGS
                .iter()
                .any(|flag| first.starts_with(flag))
    })
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let args = if should_inject_render(&args) {
        let mut injected = vec![args[0].clone(), "render".to_string()];
        injected.extend_from_slice(&args[1..]);
        injected
    } else {
        args
    };

    let matches = build_cli().get_matches_from(&args);

    init_logging(matches.get_flag("verbose"), matches.get_flag("quiet"));

    let registry = FormatRegistry::default();

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    let sets: Vec<String> = matches
        .get_many::<String>("set")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        &sets,
    );

    match matches.subcommand() {
        Some(("render", sub_matches)) => {
            let input = collect_render_input(sub_matches);
            handle_render(&input, sub_matches, &config, &registry);
        }
        Some(("prompt", sub_matches)) => {
            let stdin = io::stdin();
            let input = prompt::collect_form(&mut stdin.lock(), &mut io::stderr())
                .unwrap_or_else(|e| {
                    eprintln!("Error reading form: {e}");
                    std::process::exit(1);
                });
            eprintln!("\n{}", prompt::PREVIEW_BANNER);
            handle_render(&input, sub_matches, &config, &registry);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the verbosity flags pick the level.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Merge the optional input file with field flags; flags take precedence.
fn collect_render_input(matches: &ArgMatches) -> RawInput {
    let mut input = match matches.get_one::<String>("input") {
        Some(path) => read_input_file(path),
        None => RawInput::default(),
    };

    for (id, _) in FIELD_ARGS {
        if let Some(value) = matches.get_one::<String>(id) {
            let field = match *id {
                "title" => &mut input.title,
                "tagline" => &mut input.tagline,
                "paragraph" => &mut input.paragraph,
                "highlight" => &mut input.highlight,
                _ => &mut input.items,
            };
            *field = value.clone();
        }
    }

    input
}

fn read_input_file(path: &str) -> RawInput {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });
    let extension = Path::new(path).extension().and_then(|ext| ext.to_str());
    RawInput::from_source(&source, extension).unwrap_or_else(|e| {
        eprintln!("Error in '{path}': {e}");
        std::process::exit(1);
    })
}

/// Render the form and write it in the requested format.
fn handle_render(
    input: &RawInput,
    matches: &ArgMatches,
    config: &MdprevConfig,
    registry: &FormatRegistry,
) {
    let output_path = matches.get_one::<String>("output").map(|s| s.as_str());
    let target = resolve_target_format(
        matches.get_one::<String>("to").map(|s| s.as_str()),
        output_path,
        config,
        registry,
    );

    if let Err(e) = registry.get(&target) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let rendered = render_with_rules(input, &config.render_rules());
    let options = format_options_from_config(&target, config);
    debug!(format = %target, fragments = rendered.len(), "serializing preview");

    let text = registry
        .serialize_with_options(&rendered, &target, &options)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    match output_path {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()) {
                eprintln!("Error writing output: {e}");
                std::process::exit(1);
            }
        }
    }
}

/// Explicit --to, else the output file extension, else the configured default.
fn resolve_target_format(
    to: Option<&str>,
    output_path: Option<&str>,
    config: &MdprevConfig,
    registry: &FormatRegistry,
) -> String {
    if let Some(to) = to {
        return to.to_string();
    }
    let detected = output_path.and_then(|path| registry.detect_format_from_filename(path));
    if let Some(detected) = detected {
        debug!(format = %detected, "format detected from output filename");
        return detected;
    }
    config.output.format.clone()
}

fn format_options_from_config(target: &str, config: &MdprevConfig) -> HashMap<String, String> {
    let mut options = HashMap::new();
    if target == "html" && config.output.html.standalone {
        options.insert("standalone".to_string(), "true".to_string());
    }
    options
}

fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!(
                "  {name:<10} {} (.{})",
                format.description(),
                format.file_extensions().join(", .")
            );
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>, sets: &[String]) -> MdprevConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let mut loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    for assignment in sets {
        loader = loader.set_assignment(assignment).unwrap_or_else(|err| {
            eprintln!("Invalid --set '{assignment}': {err}");
            std::process::exit(1);
        });
    }

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
