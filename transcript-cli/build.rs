use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn input_arg() -> Arg {
    Arg::new("input")
        .help("HTML snapshot of the chat page")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn output_dir_arg() -> Arg {
    Arg::new("output-dir")
        .long("output-dir")
        .short('o')
        .help("Directory the export is written to")
        .value_hint(ValueHint::DirPath)
}

fn base_url_arg() -> Arg {
    Arg::new("base-url")
        .long("base-url")
        .help("URL the page was rendered from")
        .value_hint(ValueHint::Url)
}

fn chrome_arg() -> Arg {
    Arg::new("chrome")
        .long("chrome")
        .help("Chrome/Chromium binary used to print PDFs")
        .value_hint(ValueHint::ExecutablePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("transcript")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Export chat transcripts as Markdown or PDF")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("export-md")
                .arg(input_arg())
                .arg(output_dir_arg())
                .arg(base_url_arg())
                .arg(Arg::new("stdout").long("stdout").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("export-pdf")
                .arg(input_arg())
                .arg(output_dir_arg())
                .arg(base_url_arg())
                .arg(chrome_arg()),
        )
        .subcommand(
            Command::new("listen")
                .arg(input_arg())
                .arg(output_dir_arg())
                .arg(base_url_arg())
                .arg(chrome_arg()),
        )
        .subcommand(Command::new("profile"));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "transcript", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "transcript", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "transcript", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
