// Command-line interface for the transcript exporter
//
// This binary exports the conversation in a saved chat page (an HTML snapshot of the rendered chat UI).
// The heavy lifting lives in transcript-babel; this crate only wires files, configuration and the
// terminal to it.
//
// Usage:
//  transcript export-md <page.html> [-o <dir>] [--base-url <url>] [--stdout]   - Markdown export
//  transcript export-pdf <page.html> [-o <dir>] [--base-url <url>] [--chrome <path>]  - PDF export
//  transcript listen <page.html> [-o <dir>]   - Serve {"action": ...} messages from stdin
//  transcript profile                          - Print the effective configuration and formats as JSON
//
// Configuration:
//
// Built-in defaults are layered with ./transcript.toml (if present) and --config <path>.
// Command-line options win over both.

mod listen;
mod session;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use session::Session;
use std::io;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};
use transcript_babel::{Action, SerializedDocument};
use transcript_config::{Loader, TranscriptConfig};
use url::Url;

fn input_arg() -> Arg {
    Arg::new("input")
        .help("HTML snapshot of the chat page")
        .required(true)
        .index(1)
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn output_dir_arg() -> Arg {
    Arg::new("output-dir")
        .long("output-dir")
        .short('o')
        .help("Directory the export is written to (overrides output.directory)")
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::DirPath)
}

fn base_url_arg() -> Arg {
    Arg::new("base-url")
        .long("base-url")
        .help("URL the page was rendered from, used to resolve relative links")
        .value_parser(clap::value_parser!(Url))
        .value_hint(ValueHint::Url)
}

fn chrome_arg() -> Arg {
    Arg::new("chrome")
        .long("chrome")
        .help("Chrome/Chromium binary used to print PDFs")
        .long_help(
            "Chrome/Chromium binary used to print PDFs.\n\n\
            Without this option the binary is taken from TRANSCRIPT_CHROME_BIN,\n\
            GOOGLE_CHROME_BIN or CHROME_BIN, then searched on PATH and in the\n\
            platform's default install locations."
        )
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::ExecutablePath)
}

fn build_cli() -> Command {
    Command::new("transcript")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Export chat transcripts as Markdown or PDF")
        .long_about(
            "transcript extracts the conversation from a saved chat page and exports it.\n\n\
            Commands:\n  \
            - export-md:  Markdown document with quoted user turns\n  \
            - export-pdf: Styled PDF printed by headless Chrome\n  \
            - listen:     Answer {\"action\": \"export_md\" | \"export_pdf\"} messages on stdin\n  \
            - profile:    Print the effective configuration and available formats\n\n\
            Examples:\n  \
            transcript export-md chat.html                 # Writes ./Chat_<millis>.md\n  \
            transcript export-md chat.html --stdout        # Print the Markdown instead\n  \
            transcript export-pdf chat.html -o exports     # Writes exports/AI_Studio_<millis>.pdf"
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a transcript.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log more (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("export-md")
                .about("Export the conversation as Markdown")
                .arg(input_arg())
                .arg(output_dir_arg())
                .arg(base_url_arg())
                .arg(
                    Arg::new("stdout")
                        .long("stdout")
                        .help("Print the document instead of writing a file")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("export-pdf")
                .about("Export the conversation as PDF")
                .arg(input_arg())
                .arg(output_dir_arg())
                .arg(base_url_arg())
                .arg(chrome_arg()),
        )
        .subcommand(
            Command::new("listen")
                .about("Serve export messages from stdin, one JSON object per line")
                .arg(input_arg())
                .arg(output_dir_arg())
                .arg(base_url_arg())
                .arg(chrome_arg()),
        )
        .subcommand(
            Command::new("profile")
                .about("Print the effective configuration and available formats as JSON"),
        )
}

fn main() {
    let matches = build_cli().get_matches();
    setup_logging(matches.get_count("verbose"));

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("export-md", sub_matches)) => {
            let session = build_session(sub_matches, config);
            handle_export_command(&session, Action::ExportMarkdown, sub_matches.get_flag("stdout"));
        }
        Some(("export-pdf", sub_matches)) => {
            let session = build_session(sub_matches, config);
            handle_export_command(&session, Action::ExportPdf, false);
        }
        Some(("listen", sub_matches)) => {
            let session = build_session(sub_matches, config);
            handle_listen_command(&session);
        }
        Some(("profile", _)) => {
            handle_profile_command(&config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}

fn load_cli_config(explicit_path: Option<&str>) -> TranscriptConfig {
    let loader = Loader::new().with_optional_file("transcript.toml");
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

fn build_session(sub_matches: &ArgMatches, mut config: TranscriptConfig) -> Session {
    let input = sub_matches
        .get_one::<PathBuf>("input")
        .expect("input is required")
        .clone();
    if let Some(dir) = sub_matches.get_one::<PathBuf>("output-dir") {
        config.output.directory = dir.clone();
    }
    let base_url = sub_matches.get_one::<Url>("base-url").cloned();
    let chrome = sub_matches
        .try_get_one::<PathBuf>("chrome")
        .ok()
        .flatten()
        .cloned();

    Session::new(input, base_url, chrome, &config).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

/// Handle the export-md and export-pdf commands
fn handle_export_command(session: &Session, action: Action, to_stdout: bool) {
    let artifact = session.run(action).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    if to_stdout {
        match artifact.document {
            SerializedDocument::Text(text) => print!("{text}"),
            SerializedDocument::Binary(_) => {
                eprintln!("Binary formats (like PDF) cannot be printed. Drop --stdout.");
                std::process::exit(1);
            }
        }
        return;
    }

    let path = session.save(artifact).unwrap_or_else(|e| {
        eprintln!("Error writing export: {e}");
        std::process::exit(1);
    });
    println!("{}", path.display());
}

/// Handle the listen command
fn handle_listen_command(session: &Session) {
    let stdin = io::stdin();
    let stdout = io::stdout();
    match listen::run(session, stdin.lock(), stdout.lock()) {
        Ok(failures) => tracing::info!(failures, "input closed"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the profile command
fn handle_profile_command(config: &TranscriptConfig) {
    let formats = session::build_registry(config, None)
        .map(|registry| registry.list_formats())
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    let profile = serde_json::to_value(config).and_then(|mut value| {
        value["formats"] = serde_json::json!(formats);
        serde_json::to_string_pretty(&value)
    });
    match profile {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
