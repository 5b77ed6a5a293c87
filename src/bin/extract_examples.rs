//! Extracts ```` ```java ```` sections from markdown files and assembles
//! them into one Java file so that a compiler can check them.
//!
//! Usage:
//!   extract-examples [--tag `<tag>`] [--package `<pkg>`] [--class `<name>`] [-o `<file>`] `<files>`...

use std::{fs, io, path::PathBuf, process::ExitCode};

use clap::{Arg, ArgAction, Command};
use codecheck::{
    assembler::assembler::assemble,
    display_error,
    errors::errors::Error,
    init_logging,
    markdown::markdown::{ExtractConfig, Extractor},
};
use tracing::info;

const EXIT_FAILURE: u8 = 2;

fn run(paths: &[PathBuf], config: &ExtractConfig, output: Option<&PathBuf>) -> Result<(), Error> {
    let extractor = Extractor::new(config)?;
    let documents = extractor.load_all(paths)?;
    let java = assemble(&documents, config);

    match output {
        Some(path) => fs::write(path, java).map_err(|e| Error::io(path, e))?,
        None => print!("{}", java),
    }

    info!(files = paths.len(), "assembled examples");
    Ok(())
}

fn main() -> ExitCode {
    let matches = Command::new("extract-examples")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Assemble fenced code examples from markdown into one source file")
        .arg(
            Arg::new("files")
                .help("Markdown files, processed in the order given")
                .num_args(0..)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("tag")
                .long("tag")
                .help("Language tag on the opening fence [default: java]"),
        )
        .arg(
            Arg::new("package")
                .long("package")
                .help("Package declared by the assembled file [default: com.example]"),
        )
        .arg(
            Arg::new("class")
                .long("class")
                .help("Name of the enclosing class [default: Snippets]"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write to this file instead of stdout")
                .value_parser(clap::value_parser!(PathBuf)),
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

    let paths: Vec<PathBuf> = matches
        .get_many::<PathBuf>("files")
        .map(|files| files.cloned().collect())
        .unwrap_or_default();

    let mut config = ExtractConfig::default();
    if let Some(tag) = matches.get_one::<String>("tag") {
        config.fence_tag = tag.clone();
    }
    if let Some(package) = matches.get_one::<String>("package") {
        config.package = package.clone();
    }
    if let Some(class) = matches.get_one::<String>("class") {
        config.enclosing_type = class.clone();
    }

    match run(&paths, &config, matches.get_one::<PathBuf>("output")) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = display_error(&e, &mut io::stderr());
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
