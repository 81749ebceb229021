use bookopedia::commands::{CmdMessage, CmdResult, DisplayPerson, MessageLevel};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

/// Upper bound on the name column, so one long name does not push every row.
const MAX_NAME_WIDTH: usize = 30;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let line = match message.level {
                MessageLevel::Info => message.content.normal(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", line)
        })
        .collect()
}

pub fn render_persons(persons: &[DisplayPerson]) -> String {
    if persons.is_empty() {
        return String::new();
    }

    let name_width = persons
        .iter()
        .map(|dp| dp.person.name.as_str().width())
        .max()
        .unwrap_or(0)
        .min(MAX_NAME_WIDTH);
    let index_width = persons
        .iter()
        .map(|dp| dp.index.to_string().len())
        .max()
        .unwrap_or(1);

    let mut output = String::new();
    for dp in persons {
        let person = &dp.person;
        let name = person.name.as_str();
        let padding = name_width.saturating_sub(name.width());
        let parcels: String = person.parcels.iter().map(|p| p.to_string()).collect();

        output.push_str(&format!(
            "{:>index_width$}. {}{}  {}  {}  {}",
            dp.index.to_string().yellow(),
            name.bold(),
            " ".repeat(padding),
            person.phone,
            person.email,
            person.address.as_str().dimmed(),
        ));
        if !parcels.is_empty() {
            output.push_str(&format!("  {}", parcels.cyan()));
        }
        output.push('\n');
    }
    output
}

pub fn render_result(result: &CmdResult) -> String {
    let mut output = render_messages(&result.messages);
    output.push_str(&render_persons(&result.listed_persons));
    output
}

pub fn print_result(result: &CmdResult) {
    let output = render_result(result);
    if !output.is_empty() {
        print!("{}", output);
    }
}

pub fn print_error(error: &impl std::fmt::Display) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookopedia::index::Index;
    use bookopedia::model::Person;

    fn plain() {
        colored::control::set_override(false);
    }

    fn display(one_based: usize, person: Person) -> DisplayPerson {
        DisplayPerson {
            index: Index::from_one_based(one_based).unwrap(),
            person,
        }
    }

    fn person(name: &str, parcels: &[&str]) -> Person {
        Person::new(
            name.parse().unwrap(),
            "94351253".parse().unwrap(),
            "alice@example.com".parse().unwrap(),
            "Jurong West".parse().unwrap(),
            parcels.iter().map(|p| p.parse().unwrap()).collect(),
        )
    }

    #[test]
    fn test_messages_one_per_line() {
        plain();
        let output = render_messages(&[
            CmdMessage::success("Edited Person: Amy"),
            CmdMessage::warning("0 persons listed!"),
        ]);
        assert_eq!(output, "Edited Person: Amy\n0 persons listed!\n");
    }

    #[test]
    fn test_persons_align_names() {
        plain();
        let output = render_persons(&[
            display(1, person("Al", &["Shopee"])),
            display(2, person("Alice Pauline", &[])),
        ]);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "1. Al             94351253  alice@example.com  Jurong West  [Shopee]"
        );
        assert_eq!(
            lines[1],
            "2. Alice Pauline  94351253  alice@example.com  Jurong West"
        );
    }

    #[test]
    fn test_no_persons_renders_nothing() {
        assert_eq!(render_persons(&[]), "");
    }
}
