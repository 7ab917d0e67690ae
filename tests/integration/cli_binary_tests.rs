/*!
 * Tests that run the play_listings binary end to end
 */

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use anyhow::Result;
use crate::common;

/// Runs the binary with piped output, so the progress bar is hidden
fn run_binary(root: &Path, extra_args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_play_listings"))
        .arg(root)
        .args(extra_args)
        .output()?)
}

/// A successful run exits 0 and prints each input path on stdout
#[test]
fn test_binary_withValidListings_shouldExitZeroAndPrintInputPaths() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let en = common::create_listing_dir(
        temp_dir.path(),
        "en",
        "<content><title>App</title><shortDescription>Short</shortDescription><fullDescription>Long text.</fullDescription></content>",
    )?;
    let de = common::create_listing_dir(temp_dir.path(), "de", &common::listing_xml("Titel", "Kurz", "Lang"))?;

    let output = run_binary(temp_dir.path(), &[])?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&en.join("google_play.xml").display().to_string()));
    assert!(stdout.contains(&de.join("google_play.xml").display().to_string()));
    assert_eq!(fs::read_to_string(en.join("full-description.txt"))?, "Long text.");
    Ok(())
}

/// The bare --no-progress flag is accepted and still prints the input path
#[test]
fn test_binary_withNoProgressFlag_shouldPrintInputPaths() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let en = common::create_listing_dir(temp_dir.path(), "en", &common::listing_xml("T", "S", "F"))?;

    let output = run_binary(temp_dir.path(), &["--no-progress"])?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&en.join("google_play.xml").display().to_string()));
    Ok(())
}

/// A directory without google_play.xml fails the run with a message on stderr
#[test]
fn test_binary_withMissingInput_shouldExitNonZeroWithDiagnostic() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let en = common::create_empty_dir(temp_dir.path(), "en")?;

    let output = run_binary(temp_dir.path(), &[])?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(&en.join("google_play.xml").display().to_string()));
    assert!(!en.join("title.txt").exists());
    Ok(())
}

/// Under --on-error continue good directories are written and every failure is listed
#[test]
fn test_binary_withContinuePolicy_shouldWriteGoodDirsAndListFailures() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let aa = common::create_empty_dir(temp_dir.path(), "aa")?;
    let bb = common::create_listing_dir(temp_dir.path(), "bb", "<content><title>Broken</content>")?;
    let cc = common::create_listing_dir(temp_dir.path(), "cc", &common::listing_xml("T", "S", "F"))?;

    let output = run_binary(temp_dir.path(), &["--on-error", "continue"])?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(&aa.display().to_string()));
    assert!(stderr.contains(&bb.display().to_string()));
    assert_eq!(fs::read_to_string(cc.join("title.txt"))?, "T");
    assert_eq!(fs::read_to_string(cc.join("short-description.txt"))?, "S");
    assert_eq!(fs::read_to_string(cc.join("full-description.txt"))?, "F");
    Ok(())
}

/// --show-config prints the configuration even when the run fails
#[test]
fn test_binary_withShowConfigAndFailure_shouldStillPrintConfig() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_empty_dir(temp_dir.path(), "en")?;

    let output = run_binary(temp_dir.path(), &["--show-config"])?;

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("AppConfig"));
    assert!(stdout.contains("failure_policy"));
    Ok(())
}
