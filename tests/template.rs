// tests/template.rs

mod common;

use assert_cmd::prelude::*;
use common::catfiles_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_custom_template_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("tpl.txt"), "[{filename}]\n{content}")?;
    fs::write(temp.path().join("a.txt"), "hello")?;

    catfiles_cmd()
        .arg("a.txt")
        .arg("-t")
        .arg("tpl.txt")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("[a.txt]\nhello\n");

    temp.close()?;
    Ok(())
}

#[test]
fn test_placeholders_may_repeat() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("tpl.txt"), "{filename}|{filename}:{content}")?;
    fs::write(temp.path().join("x.txt"), "v")?;

    catfiles_cmd()
        .arg("x.txt")
        .arg("-t")
        .arg("tpl.txt")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("x.txt|x.txt:v\n");

    temp.close()?;
    Ok(())
}

#[test]
fn test_unknown_placeholder_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("tpl.txt"), "{filename} {size}")?;
    fs::write(temp.path().join("a.txt"), "hello")?;

    catfiles_cmd()
        .arg("a.txt")
        .arg("-t")
        .arg("tpl.txt")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Invalid template"))
        .stderr(predicate::str::contains("unknown placeholder '{size}'"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_unterminated_placeholder_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("tpl.txt"), "before {filename")?;
    fs::write(temp.path().join("a.txt"), "hello")?;

    catfiles_cmd()
        .arg("a.txt")
        .arg("-t")
        .arg("tpl.txt")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unterminated placeholder"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_lone_closing_brace_is_literal() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("tpl.txt"), "ok} {content}")?;
    fs::write(temp.path().join("a.txt"), "v")?;

    catfiles_cmd()
        .arg("a.txt")
        .arg("-t")
        .arg("tpl.txt")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("ok} v\n");

    temp.close()?;
    Ok(())
}

#[test]
fn test_substituted_content_is_not_rescanned() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("tpl.txt"), "X{content}X")?;
    // File content that looks like a placeholder must pass through verbatim.
    fs::write(temp.path().join("a.txt"), "{filename}")?;

    catfiles_cmd()
        .arg("a.txt")
        .arg("-t")
        .arg("tpl.txt")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("X{filename}X\n");

    temp.close()?;
    Ok(())
}

#[test]
fn test_missing_template_file_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("a.txt"), "hello")?;

    catfiles_cmd()
        .arg("a.txt")
        .arg("-t")
        .arg("no_such.tpl")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid template: cannot read"));

    temp.close()?;
    Ok(())
}
