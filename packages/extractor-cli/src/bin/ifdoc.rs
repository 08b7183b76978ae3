/**
 * ifdoc - TypeScript interface documentation generator
 *
 * Command line entry point.
 */
use clap::{Arg, ArgAction, Command};
use std::process;

use ifdoc_cli::logging::{ConsoleLogger, LogLevel};
use ifdoc_cli::main_entry::{main_fn, DocgenOptions};

fn main() {
    let matches = Command::new("ifdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates markdown reference docs from TypeScript interfaces")
        .arg(
            Arg::new("files")
                .short('f')
                .long("files")
                .value_name("LIST")
                .help("Comma separated list of files to process"),
        )
        .arg(
            Arg::new("directory")
                .short('d')
                .long("directory")
                .value_name("PATH")
                .help("Directory to process recursively"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("PATH")
                .help("Output file (stdout when omitted)"),
        )
        .arg(
            Arg::new("exclude")
                .long("exclude")
                .value_name("PATTERN")
                .action(ArgAction::Append)
                .help("Skip walked paths containing this substring"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v info, -vv debug)"),
        )
        .get_matches();

    let options = DocgenOptions {
        files: matches.get_one::<String>("files").cloned(),
        directory: matches.get_one::<String>("directory").cloned(),
        output: matches.get_one::<String>("output").cloned(),
        exclude: matches
            .get_many::<String>("exclude")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
    };

    let level = match matches.get_count("verbose") {
        0 => LogLevel::Error,
        1 => LogLevel::Info,
        _ => LogLevel::Debug,
    };
    let logger = ConsoleLogger::new(level);

    process::exit(main_fn(&options, &logger));
}
