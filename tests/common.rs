// tests/common.rs

use std::process::Command;

// Helper function to get the catfiles binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn catfiles_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("catfiles"))
}

// Helper function to get the lsfiles binary command
#[allow(dead_code)]
pub fn lsfiles_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("lsfiles"))
}
