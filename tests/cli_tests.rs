use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

/// Nine hand-then-board pairs filling cells 0..=8 with each player's first card.
fn full_game_script() -> String {
    (0..9).map(|cell| format!("hand 0\nboard {cell}\n")).collect()
}

#[test]
fn scripted_game_runs_to_completion() {
    Command::cargo_bin("triad")
        .expect("binary exists")
        .args(["--seed", "7"])
        .write_stdin(full_game_script())
        .assert()
        .success()
        .stdout(predicate::str::contains("moves first"))
        .stdout(predicate::str::contains("game finished"));
}

#[test]
fn occupied_cell_is_reported_and_play_continues() {
    let script = "h 0\nb 4\nh 0\nb 4\nb 5\nquit\n";
    Command::cargo_bin("triad")
        .expect("binary exists")
        .args(["--seed", "1"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("rejected: cell 4 is already occupied"))
        .stdout(predicate::str::contains("at cell 5"))
        .stdout(predicate::str::contains("game abandoned"));
}

#[test]
fn unrecognised_input_is_ignored() {
    Command::cargo_bin("triad")
        .expect("binary exists")
        .args(["--seed", "3"])
        .write_stdin("dance\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unrecognised input 'dance'"));
}

#[test]
fn unfillable_board_is_refused() {
    Command::cargo_bin("triad")
        .expect("binary exists")
        .args(["--height", "5", "--width", "5"])
        .write_stdin("")
        .assert()
        .failure();
}

#[test]
fn config_file_sets_board_size() {
    let mut f = NamedTempFile::new().expect("tempfile");
    write!(f, r#"{{ "height": 2, "width": 2, "hand_size": 2, "seed": 5 }}"#).expect("write");
    let script: String = (0..4).map(|cell| format!("h 0\nb {cell}\n")).collect();
    Command::cargo_bin("triad")
        .expect("binary exists")
        .arg("--config")
        .arg(f.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("2x2 board"))
        .stdout(predicate::str::contains("game finished"));
}
