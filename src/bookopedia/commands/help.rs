use super::{add, clear, delete, edit, exit, find, list, CmdMessage, CmdResult};
use crate::error::Result;

pub const COMMAND_WORD: &str = "help";

pub const USAGE: &str = "help: Shows program usage instructions.\n\
Example: help";

/// Usage text of every command, in the order a new user needs them.
pub fn summary() -> String {
    [
        add::USAGE,
        edit::USAGE,
        delete::USAGE,
        find::USAGE,
        list::USAGE,
        clear::USAGE,
        USAGE,
        exit::USAGE,
    ]
    .join("\n\n")
}

pub fn run() -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(summary()));
    result.show_help = true;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_every_command() {
        let result = run().unwrap();
        assert!(result.show_help);
        let text = result.feedback();
        for word in ["add:", "edit:", "delete:", "find:", "list:", "clear:", "help:", "exit:"] {
            assert!(text.contains(word), "missing {word}");
        }
    }
}
