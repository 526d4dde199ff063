use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// Command-line arguments for the vsixpack tool
#[derive(Debug)]
pub struct Args {
    /// Directory to package
    pub src: PathBuf,

    /// Output .vsix (zip) file path
    pub out: PathBuf,

    /// Print each archived entry
    pub verbose: bool,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        Self::from_matches(&command().get_matches())
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            src: matches
                .get_one::<String>("src")
                .map(PathBuf::from)
                .unwrap_or_default(),
            out: matches
                .get_one::<String>("out")
                .map(PathBuf::from)
                .unwrap_or_default(),
            verbose: matches.get_flag("verbose"),
        }
    }
}

fn command() -> Command {
    Command::new("vsixpack")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Package a directory tree into a deterministic .vsix (zip) archive")
        .arg(
            Arg::new("src")
                .short('s')
                .long("src")
                .value_name("DIR")
                .required(true)
                .help("Directory to zip"),
        )
        .arg(
            Arg::new("out")
                .short('o')
                .long("out")
                .value_name("FILE")
                .required(true)
                .help("Output .vsix (zip) file path"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Print each archived entry"),
        )
}
