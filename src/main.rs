use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command};
use tracing::{debug, info};

use accounts::formatting::{Identity, Render, Terminal};
use accounts::parsing;

mod output;
mod problem;

use output::{Format, Level, Reporter, Verdict};

const DEFAULT_FILENAME: &str = "accounts.txt";

fn main() -> ExitCode {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("accounts")
        .version(VERSION)
        .about("Parse an accounts file.")
        .long_about("Parse an accounts file. Problems with the format of the file are reported on standard error; the account data is printed on standard output in the canonical format.")
        .after_help("Binary flags such as **used credit card** are printed as flag lines.")
        .arg(
            Arg::new("validate")
                .short('v')
                .long("validate")
                .action(ArgAction::SetTrue)
                .help("Just check the file to make sure it still conforms to the assumptions of the parser, printing any problems as warnings."),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Don't print warnings."),
        )
        .arg(
            Arg::new("stdout")
                .short('O')
                .long("stdout")
                .action(ArgAction::SetTrue)
                .help("Suppress normal output and print warnings to stdout."),
        )
        .arg(
            Arg::new("explain")
                .short('x')
                .long("explain")
                .action(ArgAction::SetTrue)
                .help("Show the offending line in context along with an explanation of what was expected."),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("How to print the account data."),
        )
        .arg(
            Arg::new("raw-control-chars")
                .short('R')
                .long("raw-control-chars")
                .action(ArgAction::SetTrue)
                .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file."),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Log what the parser is doing to standard error."),
        )
        .arg(
            Arg::new("filename")
                .env("ACCOUNTS_FILE")
                .help("The accounts file to read, or '-' for standard input. Defaults to ~/accounts.txt."),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let forced = matches.get_flag("raw-control-chars");
    let stdout: &dyn Render = if forced || std::io::stdout().is_terminal() {
        &Terminal
    } else {
        &Identity
    };
    let stderr: &dyn Render = if forced || std::io::stderr().is_terminal() {
        &Terminal
    } else {
        &Identity
    };

    let filename = match matches.get_one::<String>("filename") {
        Some(filename) => PathBuf::from(filename),
        None => match std::env::var_os("HOME") {
            Some(home) => Path::new(&home).join(DEFAULT_FILENAME),
            None => {
                eprintln!(
                    "{}: no accounts file given and HOME is not set",
                    stderr.style(accounts::formatting::Syntax::Error, "error")
                );
                return ExitCode::FAILURE;
            }
        },
    };
    info!("Reading file: {}", filename.display());

    let content = match parsing::load(&filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error, stderr));
            return ExitCode::FAILURE;
        }
    };

    let document = parsing::parse(&content);

    let level = Level::from_flags(
        matches.get_flag("validate"),
        matches.get_flag("quiet"),
        matches.get_flag("stdout"),
    );

    // problems going to stdout share its colouring decision
    let renderer = match level {
        Level::Stdout => stdout,
        _ => stderr,
    };

    let name = filename.to_string_lossy();
    let reporter = Reporter {
        level,
        explain: matches.get_flag("explain"),
        filename: &name,
        renderer,
    };

    let verdict = reporter.report(&document.errors);
    if let Verdict::Stop(_) = verdict {
        debug!(?verdict, "not printing entries");
        return verdict.into();
    }

    let format = match matches
        .get_one::<String>("format")
        .map(String::as_str)
    {
        Some("json") => Format::Json,
        _ => Format::Text,
    };

    match output::entries(&document, format, stdout) {
        Ok(result) => {
            print!("{}", result);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!(
                "{}: {}",
                stderr.style(accounts::formatting::Syntax::Error, "error"),
                error
            );
            ExitCode::FAILURE
        }
    }
}
