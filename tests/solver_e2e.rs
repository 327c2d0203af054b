//! End-to-end tests
//!
//! Runs the built `hangman` binary: `play` over piped stdin, and `solve`
//! driving `play` as a child process.

use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;

const BIN: &str = env!("CARGO_BIN_EXE_hangman");

fn lexicon(words: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for word in words {
        writeln!(file, "{word}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn play(args: &[&str], input: &str) -> String {
    let mut child = Command::new(BIN)
        .arg("play")
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to run hangman play");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

fn solve(args: &[&str]) -> String {
    let output = Command::new(BIN)
        .arg("solve")
        .args(args)
        .env("NO_COLOR", "1")
        .stderr(Stdio::null())
        .output()
        .expect("failed to run hangman solve");

    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

fn score_line(out: &str) -> (u32, u32) {
    let line = out
        .lines()
        .find_map(|l| l.strip_prefix("< SCORE: "))
        .and_then(|l| l.strip_suffix(" >"))
        .expect("no score line");
    let (wins, total) = line.split_once('/').unwrap();
    (wins.parse().unwrap(), total.parse().unwrap())
}

#[test]
fn play_transcript_over_pipes() {
    let file = lexicon(&["abba"]);
    let path = file.path().to_str().unwrap();

    let out = play(&[path], "a\nz\nb\n");

    assert_eq!(
        out,
        "Welcome to Hangman!\n\
         The word now looks like this: ----\n\
         You have 8 guesses left.\n\
         You guess: A\n\
         The word now looks like this: A--A\n\
         You have 8 guesses left.\n\
         You guess: Z\n\
         There are no Z's in the word.\n\
         You have 7 guesses left.\n\
         You guess: B\n\
         You guessed the word: ABBA\n\
         You win.\n"
    );
}

#[test]
fn play_rush_debug_names_each_answer() {
    let file = lexicon(&["ab", "ba"]);
    let path = file.path().to_str().unwrap();

    let out = play(&["--seed", "3", "-dr", path], "a\nb\na\nb\n");

    assert!(out.starts_with("[ RUSH MODE ACTIVATED ]\nWelcome to Hangman!\n"));
    assert_eq!(out.matches("[ DEBUG MODE - lexicon[").count(), 2);
    assert_eq!(out.matches("You win.").count(), 2);
    assert!(out.ends_with("Entire lexicon has been played.\n"));
}

#[test]
fn play_hard_flag_alone_selects_six_guesses() {
    let file = lexicon(&["abba"]);
    let path = file.path().to_str().unwrap();

    let out = play(&["-h", path], "z\na\nb\n");

    assert!(out.starts_with("Welcome to Hangman!\n"));
    assert!(out.contains("You have 6 guesses left.\nYou guess: Z\n"));
    assert!(out.contains("There are no Z's in the word.\nYou have 5 guesses left.\n"));
    assert!(!out.contains("Usage"));
    assert!(out.ends_with("You win.\n"));
}

#[test]
fn play_rush_flag_alone_plays_every_word() {
    let file = lexicon(&["ab", "ba"]);
    let path = file.path().to_str().unwrap();

    let out = play(&["-r", path], "a\nb\na\nb\n");

    assert!(out.starts_with("[ RUSH MODE ACTIVATED ]\nWelcome to Hangman!\n"));
    assert!(!out.contains("[ DEBUG MODE"));
    assert_eq!(out.matches("You have 8 guesses left.").count(), 4);
    assert_eq!(out.matches("You win.").count(), 2);
    assert!(out.ends_with("Entire lexicon has been played.\n"));
}

#[test]
fn play_debug_flag_alone_shows_answer() {
    let file = lexicon(&["abba"]);
    let path = file.path().to_str().unwrap();

    let out = play(&["-d", path], "a\nb\n");

    assert!(out.starts_with(
        "Welcome to Hangman!\n\
         [ DEBUG MODE - lexicon[0]: ABBA ]\n\
         The word now looks like this: ----\n\
         You have 8 guesses left.\n"
    ));
    assert!(!out.contains("RUSH"));
    assert!(out.ends_with("You win.\n"));
}

#[test]
fn play_long_help_still_prints_usage() {
    let output = Command::new(BIN)
        .args(["play", "--help"])
        .stdin(Stdio::null())
        .output()
        .unwrap();

    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("Usage: hangman play"));
}

#[test]
fn play_without_lexicon_fails() {
    let status = Command::new(BIN)
        .arg("play")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .unwrap();
    assert!(!status.success());
}

#[test]
fn solver_plays_whole_lexicon() {
    let words = ["moon", "tree", "apple", "sky", "river", "stone"];
    let file = lexicon(&words);
    let path = file.path().to_str().unwrap();

    let out = solve(&["--seed", "7", path]);

    assert!(out.starts_with("< Starting Hangman solver... >\n"));
    let (wins, total) = score_line(&out);
    assert_eq!(total as usize, words.len());
    assert!(wins <= total);
}

#[test]
fn solver_debug_echoes_transcript() {
    let file = lexicon(&["moon", "tree"]);
    let path = file.path().to_str().unwrap();

    let out = solve(&["--seed", "1", "-d", path]);

    assert!(out.starts_with("< DEBUG MODE ACTIVATED >\n< Starting Hangman solver... >\n"));
    assert!(out.contains("[ RUSH MODE ACTIVATED ]"));
    assert_eq!(out.matches("Encountered >").count(), 2);
    assert_eq!(score_line(&out).1, 2);
}

#[test]
fn candidates_solver_wins_everything_it_knows() {
    let words = ["moon", "tree", "apple", "sky", "river"];
    let file = lexicon(&words);
    let path = file.path().to_str().unwrap();

    let out = solve(&["--strategy", "candidates", "--seed", "2", path]);

    assert_eq!(score_line(&out), (5, 5));
}

#[test]
fn solver_is_deterministic_for_a_seed() {
    let file = lexicon(&["moon", "tree", "apple", "sky", "river", "stone"]);
    let path = file.path().to_str().unwrap();

    let first = solve(&["--seed", "11", "-d", path]);
    let second = solve(&["--seed", "11", "-d", path]);

    assert_eq!(first, second);
}
