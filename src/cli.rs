use lexopt::{Arg, Parser};
use std::path::PathBuf;

pub(crate) const USAGE: &str = "Usage: gridsnake [-c|--config <FILE>] [--log-file <FILE>]";

pub(crate) const HELP: &str = concat!(
    "Usage: gridsnake [<options>]\n",
    "\n",
    "Play Snake on a fixed grid in the terminal.\n",
    "\n",
    "Options:\n",
    "  -c, --config <FILE>   Read configuration from <FILE>\n",
    "      --log-file <FILE> Write log messages to <FILE>\n",
    "  -h, --help            Show this help message and exit\n",
    "  -V, --version         Show the program version and exit\n",
);

/// What the user asked the program to do
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Invocation {
    Run(Arguments),
    Help,
    Version,
}

/// Options for playing a game
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    /// Configuration file to use instead of the default one
    pub(crate) config: Option<PathBuf>,

    /// File to write log records to
    pub(crate) log_file: Option<PathBuf>,
}

impl Invocation {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<Invocation, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Invocation::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Invocation::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Invocation::Run(args))
    }
}
