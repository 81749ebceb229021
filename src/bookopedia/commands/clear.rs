use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Model;
use tracing::info;

pub const COMMAND_WORD: &str = "clear";

pub const USAGE: &str = "clear: Clears all entries from the address book.";

pub fn run(model: &mut Model) -> Result<CmdResult> {
    let removed = model.book().len();
    model.book_mut().clear();
    model.show_all();
    info!(removed, "cleared address book");

    Ok(CmdResult::default().with_message(CmdMessage::success("Address book has been cleared!")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AddressBook;
    use crate::test_utils::typical_book;

    #[test]
    fn test_clears_book() {
        let mut model = Model::new(typical_book());
        run(&mut model).unwrap();
        assert!(model.book().is_empty());
    }

    #[test]
    fn test_clearing_empty_book_succeeds() {
        let mut model = Model::new(AddressBook::new());
        let result = run(&mut model).unwrap();
        assert_eq!(result.feedback(), "Address book has been cleared!");
    }
}
