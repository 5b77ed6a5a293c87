//! Enforces the camel case convention for identifiers
//! (<https://google.github.io/styleguide/jsguide.html#naming-camel-case-defined>).
//!
//! Usage:
//!   check-identifier-case [--root `<dir>`] [--extension `<ext>`] [-v]
//!
//! Exits 0 when clean, 1 when violations were found and 2 on any other failure.

use std::{io, path::PathBuf, process::ExitCode};

use clap::{Arg, ArgAction, Command};
use codecheck::{
    checker::checker::{check_tree, write_report, CheckConfig},
    display_error, init_logging,
};
use tracing::info;

const EXIT_DODGY: u8 = 1;
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let matches = Command::new("check-identifier-case")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Report identifiers containing runs of three or more capitals")
        .arg(
            Arg::new("root")
                .long("root")
                .help("Directory to scan [default: src/main/java]"),
        )
        .arg(
            Arg::new("extension")
                .long("extension")
                .help("File extension to scan, without the dot [default: java]"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("Log progress to stderr (repeat for more)"),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"));

    let mut config = CheckConfig::default();
    if let Some(root) = matches.get_one::<String>("root") {
        config.root = PathBuf::from(root);
    }
    if let Some(extension) = matches.get_one::<String>("extension") {
        config.extension = extension.clone();
    }
    info!(root = %config.root.display(), extension = %config.extension, "checking identifier case");

    let report = match check_tree(&config) {
        Ok(report) => report,
        Err(e) => {
            let _ = display_error(&e, &mut io::stderr());
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    if let Err(e) = write_report(&report, &mut io::stdout().lock()) {
        eprintln!("Error writing report: {}", e);
        return ExitCode::from(EXIT_FAILURE);
    }

    if report.is_dodgy() {
        ExitCode::from(EXIT_DODGY)
    } else {
        ExitCode::SUCCESS
    }
}
