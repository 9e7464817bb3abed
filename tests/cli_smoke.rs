use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn wikistats() -> Command {
    Command::cargo_bin("wikistats").unwrap()
}

#[test]
fn help_describes_the_wiki_argument() {
    wikistats()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("lang.family"));
}

#[test]
fn fails_without_a_mode_flag() {
    wikistats()
        .arg("en.wikipedia")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn totals_and_user_are_mutually_exclusive() {
    wikistats()
        .args(["en.wikipedia", "--totals", "--user", "Alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn fails_without_the_wiki_positional() {
    wikistats().arg("--totals").assert().failure();
}

#[test]
fn rejects_wiki_without_separator() {
    // Site resolution happens before any network access.
    wikistats()
        .args(["enwiki", "--user", "Alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lang.family"));
}

#[test]
fn rejects_malformed_month_cutoff_before_fetching() {
    wikistats()
        .args(["en.wikipedia", "--user", "Alice", "--month-stats-since", "2020/01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("month-stats-since"));
}

#[test]
fn rejects_malformed_week_cutoff_before_fetching() {
    wikistats()
        .args(["en.wikipedia", "--user", "Alice", "-w", "2020-99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("week-stats-since"));
}

#[test]
fn rejects_malformed_asof_timestamp() {
    wikistats()
        .args(["en.wikipedia", "--user", "Alice", "--asof", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("timestamp"));
}

#[test]
fn rejects_inverted_window() {
    wikistats()
        .args([
            "en.wikipedia",
            "--user",
            "Alice",
            "--asof",
            "2020-01-01",
            "--since",
            "2020-06-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("since"));
}
