use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn cyk() -> Command {
    Command::cargo_bin("cyk").unwrap()
}

fn grammar_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn accepts_member() {
    cyk()
        .args(["example_data/ab.cnf", "ab"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ab: ACCEPTED"))
        .stdout(predicate::str::contains("A | S\n  | B\n"));
}

#[test]
fn rejects_non_member() {
    cyk()
        .args(["example_data/ab.cnf", "ba"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ba: REJECTED"))
        .stdout(predicate::str::contains("B | -\n  | A\n"));
}

#[test]
fn quiet_hides_table() {
    cyk()
        .args(["--quiet", "example_data/balanced.cnf", "aabb", "aab"])
        .assert()
        .code(1)
        .stdout("aabb: ACCEPTED\naab: REJECTED\n");
}

#[test]
fn trims_inputs() {
    cyk()
        .args(["-q", "example_data/balanced.cnf", "  ab "])
        .assert()
        .success()
        .stdout("ab: ACCEPTED\n");
}

#[test]
fn empty_input_is_an_error() {
    cyk()
        .args(["example_data/ab.cnf", ""])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("input string cannot be empty"));
}

#[test]
fn reports_missing_arrow() {
    let file = grammar_file("S -> AB\nS AB\nA -> a\nB -> b\n");

    cyk()
        .arg(file.path())
        .arg("ab")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(":2]"))
        .stderr(predicate::str::contains("Parse error: expected `->` in rule `S AB`"));
}

#[test]
fn reports_every_malformed_line() {
    cyk()
        .args(["example_data/malformed.cnf", "ab"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected `->` in rule `S AB`"))
        .stderr(predicate::str::contains("more than one `->` in rule `B -> b -> c`"));
}

#[test]
fn reports_bad_right_side() {
    let file = grammar_file("S -> Ab\nA -> a\n");

    cyk()
        .arg(file.path())
        .arg("ab")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("CNF error: right side"));
}

#[test]
fn reports_undefined_symbol() {
    let file = grammar_file("S -> AB\nB -> b\n");

    cyk()
        .arg(file.path())
        .arg("ab")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nonterminal `A` is used but never defined"));
}

#[test]
fn reports_missing_file() {
    cyk()
        .args(["example_data/nope.cnf", "ab"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("File error"));
}

#[test]
fn validates_without_inputs() {
    cyk()
        .arg("example_data/balanced.cnf")
        .assert()
        .success()
        .stdout(predicate::str::contains("valid CNF grammar with 5 rule(s)"));
}

#[test]
fn custom_start_symbol() {
    cyk()
        .args(["-q", "--start", "A", "example_data/ab.cnf", "a"])
        .assert()
        .success()
        .stdout("a: ACCEPTED\n");
}

#[test]
fn generates_seeded_words() {
    let first = cyk()
        .args(["example_data/balanced.cnf", "--generate", "5", "--seed", "11"])
        .assert()
        .success();
    let words = String::from_utf8(first.get_output().stdout.clone()).unwrap();

    assert_eq!(words.lines().count(), 5);
    for word in words.lines() {
        let half = word.len() / 2;
        assert!(word[..half].chars().all(|c| c == 'a'), "{}", word);
        assert!(word[half..].chars().all(|c| c == 'b'), "{}", word);
    }

    cyk()
        .args(["example_data/balanced.cnf", "-g", "5", "--seed", "11"])
        .assert()
        .success()
        .stdout(words.into_bytes());
}

#[test]
fn reads_grammar_from_stdin() {
    cyk()
        .args(["-q", "-", "ab", "ba"])
        .write_stdin("S -> AB\nA -> a\nB -> b\n")
        .assert()
        .code(1)
        .stdout("ab: ACCEPTED\nba: REJECTED\n");
}

#[test]
fn stdin_grammar_errors_name_the_line() {
    cyk()
        .args(["-", "ab"])
        .write_stdin("S -> AB\nA a\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("[line 2]"))
        .stderr(predicate::str::contains("expected `->` in rule `A a`"));
}

#[test]
fn defined_custom_start_has_no_warning() {
    let file = grammar_file("A -> a\n");

    cyk()
        .env_remove("RUST_LOG")
        .args(["-q", "--start", "A"])
        .arg(file.path())
        .arg("a")
        .assert()
        .success()
        .stdout("a: ACCEPTED\n")
        .stderr(predicate::str::contains("has no rules").not());
}

#[test]
fn undefined_custom_start_warns() {
    cyk()
        .env_remove("RUST_LOG")
        .args(["-q", "--start", "X", "example_data/ab.cnf", "ab"])
        .assert()
        .code(1)
        .stdout("ab: REJECTED\n")
        .stderr(predicate::str::contains("Start symbol `X` has no rules"))
        .stderr(predicate::str::contains("`S`").not());
}
