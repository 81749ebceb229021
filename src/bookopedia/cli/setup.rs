use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bookopedia", bin_name = "bookopedia", version)]
#[command(
    about = "Address book for contacts and their parcels",
    long_about = "Address book for contacts and their parcels.\n\n\
Pass a command to run it once, e.g.\n\n    bookopedia edit 1 p/98765432 t/Shopee\n\n\
or pass nothing to type commands one per line. Type `help` for the command list."
)]
pub struct Cli {
    /// Directory holding the address book and config.json
    #[arg(long, env = "BOOKOPEDIA_HOME", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to run once; commands are read from stdin when omitted
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

impl Cli {
    /// The one-shot command line, if one was given.
    pub fn command_line(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}
