use super::{displayed_persons, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Model;

pub const COMMAND_WORD: &str = "list";

pub const USAGE: &str = "list: Lists all persons in the address book.";

pub fn run(model: &mut Model) -> Result<CmdResult> {
    model.show_all();
    Ok(CmdResult::default()
        .with_message(CmdMessage::info("Listed all persons"))
        .with_listed_persons(displayed_persons(model)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NameFilter;
    use crate::test_utils::typical_book;

    #[test]
    fn test_resets_filter() {
        let mut model = Model::new(typical_book());
        model.set_filter(NameFilter::new(vec!["Alice".into()]));

        let result = run(&mut model).unwrap();

        assert_eq!(result.listed_persons.len(), model.book().len());
        assert_eq!(result.feedback(), "Listed all persons");
    }
}
