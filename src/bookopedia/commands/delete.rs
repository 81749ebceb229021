use super::{CmdMessage, CmdResult};
use crate::error::{CommandError, Result};
use crate::index::Index;
use crate::model::Model;
use tracing::info;

pub const COMMAND_WORD: &str = "delete";

pub const USAGE: &str = "delete: Deletes the person identified by the index number used in the \
displayed person list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete 1";

pub fn run(model: &mut Model, index: Index) -> Result<CmdResult> {
    let target = model
        .displayed_at(index)
        .cloned()
        .ok_or(CommandError::InvalidPersonIndex)?;
    let removed = model.book_mut().remove(&target)?;
    info!(%index, name = %removed.name, "deleted person");

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Deleted Person: {}",
        removed
    ))))
}
