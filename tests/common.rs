#![allow(dead_code)]

use std::process::{Command, Output};

/// Runs the built binary with `args` and an isolated config directory.
pub fn run(args: &[&str]) -> Output {
    let home = std::env::temp_dir().join(format!("portfolio-tui-it-{}", std::process::id()));
    Command::new(env!("CARGO_BIN_EXE_portfolio-tui"))
        .args(args)
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .output()
        .expect("Failed to spawn portfolio-tui")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
