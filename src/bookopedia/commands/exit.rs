use super::{CmdMessage, CmdResult};
use crate::error::Result;

pub const COMMAND_WORD: &str = "exit";

pub const USAGE: &str = "exit: Exits the program.";

pub fn run() -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info("Exiting Address Book as requested ..."));
    result.exit = true;
    Ok(result)
}
