//! Binary behaviour via assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{write_config, write_script};

fn termpaint(config: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_termpaint"));
    cmd.env("NO_COLOR", "1").arg("--config").arg(config);
    cmd
}

#[test]
fn predict_prints_completion() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, 16, 16);

    termpaint(&config)
        .args(["predict", "draw_pi"])
        .assert()
        .success()
        .stdout("draw_pixel\n");

    termpaint(&config)
        .args(["predict", "draw_pixel", "1", "2"])
        .assert()
        .success()
        .stdout("<complete>\n");

    termpaint(&config)
        .args(["predict", "nothing", "here"])
        .assert()
        .success()
        .stdout("<invalid>\n");
}

#[test]
fn run_executes_script_and_saves() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, 16, 16);
    let script = write_script(
        temp.path(),
        "ok.tp",
        &["# a comment", "", "fg gold", "draw_line 0 0 15 15", "save_image out.png"],
    );

    termpaint(&config)
        .arg("run")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Image saved as `out.png`."));
    assert!(temp.path().join("images").join("out.png").exists());
}

#[test]
fn run_fails_when_a_line_fails() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, 16, 16);
    let script = write_script(temp.path(), "bad.tp", &["ping", "draw_pixel 99 99", "ping"]);

    termpaint(&config)
        .arg("run")
        .arg(&script)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid coordinates."))
        .stdout(predicate::str::contains("pong").count(2));
}

#[test]
fn repl_runs_lines_and_predicts() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, 16, 16);

    termpaint(&config)
        .write_stdin("ping\ndraw_pi?\nexit\nping extra\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("pong"))
        .stdout(predicate::str::contains("draw_pixel"))
        .stdout(predicate::str::contains("pong: extra").not());
}

#[test]
fn repl_repeats_and_lists_history() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, 16, 16);

    termpaint(&config)
        .write_stdin("!!\nping one\nnope\n!!\nhistory\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No previous command."))
        .stdout(predicate::str::contains("pong: one").count(2))
        .stdout(predicate::str::contains("ping one"));
}

#[test]
fn config_commands_use_given_file() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, 48, 24);

    termpaint(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    termpaint(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("width = 48"))
        .stdout(predicate::str::contains("height = 24"));
}

#[test]
fn invalid_config_is_reported() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[canvas]\nwidth = 0\n").unwrap();

    termpaint(&path)
        .args(["predict", "ping"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}
