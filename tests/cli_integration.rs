use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

const ADD_AMY: &str = "add n/Amy Bee p/11111111 e/amy@example.com a/Block 312, Amy Street 1 t/Shopee";
const ADD_BOB: &str = "add n/Bob Choo p/22222222 e/bob@example.com a/Block 123, Bobby Street 3";

fn bookopedia(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bookopedia").unwrap();
    cmd.env("BOOKOPEDIA_HOME", home).env_remove("RUST_LOG");
    cmd
}

fn run_line(home: &Path, line: &str) -> assert_cmd::assert::Assert {
    bookopedia(home).args(line.split(' ')).assert()
}

#[test]
fn test_add_edit_list_persist() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    run_line(home, ADD_AMY)
        .success()
        .stdout(predicate::str::contains("New person added: Amy Bee"));

    run_line(home, "edit 1 p/98765432 t/Lazada t/Shopee")
        .success()
        .stdout(predicate::str::contains(
            "Edited Person: Amy Bee Phone: 98765432",
        ))
        .stdout(predicate::str::contains("Parcels: [Lazada][Shopee]"));

    run_line(home, "list")
        .success()
        .stdout(predicate::str::contains("Listed all persons"))
        .stdout(predicate::str::contains("98765432"));

    let saved = std::fs::read_to_string(home.join("addressbook.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(json["persons"][0]["phone"], "98765432");
    assert_eq!(json["persons"][0]["parcels"][0], "Lazada");
}

#[test]
fn test_edit_clears_parcels() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    run_line(home, ADD_AMY).success();
    run_line(home, "edit 1 t/").success();

    let saved = std::fs::read_to_string(home.join("addressbook.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(json["persons"][0]["parcels"], serde_json::json!([]));
}

#[test]
fn test_edit_errors_exit_non_zero() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    run_line(home, ADD_AMY).success();

    run_line(home, "edit 1")
        .failure()
        .stderr(predicate::str::contains(
            "At least one field to edit must be provided.",
        ));

    run_line(home, "edit 1 p/911a")
        .failure()
        .stderr(predicate::str::contains(
            "Phone numbers should only contain numbers",
        ));

    run_line(home, "edit 0 n/Bob")
        .failure()
        .stderr(predicate::str::contains("Invalid command format!"))
        .stderr(predicate::str::contains("edit: Edits the details"));

    run_line(home, "edit 1 t/Shopee t/")
        .failure()
        .stderr(predicate::str::contains("Parcel names should be alphanumeric"));

    run_line(home, "edit 5 n/Bob")
        .failure()
        .stderr(predicate::str::contains("The person index provided is invalid"));
}

#[test]
fn test_edit_into_duplicate_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    run_line(home, ADD_AMY).success();
    run_line(home, ADD_BOB).success();

    run_line(home, "edit 2 n/Amy Bee")
        .failure()
        .stderr(predicate::str::contains(
            "This person already exists in the address book",
        ));
}

#[test]
fn test_unknown_command() {
    let temp_dir = tempfile::tempdir().unwrap();
    run_line(temp_dir.path(), "frobnicate 1")
        .failure()
        .stderr(predicate::str::contains("Unknown command"));
}

#[test]
fn test_interactive_session() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = format!("{ADD_AMY}\n{ADD_BOB}\n\nedit 9 n/X\nfind bob\nedit 1 e/bob@example.org\nexit\nlist\n");

    bookopedia(temp_dir.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("New person added: Bob Choo"))
        .stdout(predicate::str::contains("1 persons listed!"))
        .stdout(predicate::str::contains(
            "Edited Person: Bob Choo Phone: 22222222 Email: bob@example.org",
        ))
        .stdout(predicate::str::contains("Exiting Address Book as requested"))
        .stdout(predicate::str::contains("Listed all persons").not())
        .stderr(predicate::str::contains("The person index provided is invalid"));
}

#[test]
fn test_data_dir_flag_overrides_env() {
    let env_home = tempfile::tempdir().unwrap();
    let flag_home = tempfile::tempdir().unwrap();

    bookopedia(env_home.path())
        .arg("--data-dir")
        .arg(flag_home.path())
        .args(ADD_AMY.split(' '))
        .assert()
        .success();

    assert!(flag_home.path().join("addressbook.json").exists());
    assert!(!env_home.path().join("addressbook.json").exists());
}

#[test]
fn test_config_data_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    std::fs::write(home.join("config.json"), r#"{"data_file":"contacts.json"}"#).unwrap();

    run_line(home, ADD_AMY).success();

    assert!(home.join("contacts.json").exists());
    assert!(!home.join("addressbook.json").exists());
}
