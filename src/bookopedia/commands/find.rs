use super::{displayed_persons, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Model, NameFilter};
use tracing::debug;

pub const COMMAND_WORD: &str = "find";

pub const USAGE: &str = "find: Finds all persons whose names contain any of the specified \
keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";

pub fn run(model: &mut Model, filter: &NameFilter) -> Result<CmdResult> {
    model.set_filter(filter.clone());
    let listed = displayed_persons(model);
    debug!(keywords = ?filter.keywords(), matches = listed.len(), "filtered persons");

    let summary = format!("{} persons listed!", listed.len());
    let message = if listed.is_empty() {
        CmdMessage::warning(summary)
    } else {
        CmdMessage::info(summary)
    };
    Ok(CmdResult::default()
        .with_message(message)
        .with_listed_persons(listed))
}
