/*!
 * Tests for writing listing text files
 */

use std::fs;
use anyhow::Result;
use play_listings::errors::ExtractError;
use play_listings::models::listing::{Listing, ListingDirectory, ListingField};
use play_listings::service::traits::i_service::WriterServiceTrait;
use play_listings::service::writer::TextWriterService;
use crate::common;

fn sample_listing() -> Listing {
    Listing {
        title: "Metadata Remover".to_string(),
        short_description: "  Strip metadata \n".to_string(),
        full_description: "Überall.\n\nLine two".to_string(),
    }
}

/// Each field lands in its fixed file name, byte for byte
#[test]
fn test_write_listing_withListing_shouldWriteThreeFilesVerbatim() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = common::create_empty_dir(temp_dir.path(), "de-DE")?;
    let directory = ListingDirectory::new(&dir);

    let written = TextWriterService::new().write_listing(&directory, &sample_listing())?;

    assert_eq!(written, vec![
        dir.join("title.txt"),
        dir.join("short-description.txt"),
        dir.join("full-description.txt"),
    ]);
    assert_eq!(fs::read_to_string(dir.join("title.txt"))?, "Metadata Remover");
    assert_eq!(fs::read_to_string(dir.join("short-description.txt"))?, "  Strip metadata \n");
    assert_eq!(fs::read_to_string(dir.join("full-description.txt"))?, "Überall.\n\nLine two");
    Ok(())
}

/// Existing files are fully overwritten, not appended to
#[test]
fn test_write_listing_withExistingFiles_shouldOverwrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = common::create_empty_dir(temp_dir.path(), "en-US")?;
    fs::write(dir.join("title.txt"), "an old and much longer title that must disappear")?;
    let directory = ListingDirectory::new(&dir);

    TextWriterService::new().write_listing(&directory, &sample_listing())?;

    assert_eq!(fs::read_to_string(directory.output_path(ListingField::Title))?, "Metadata Remover");
    Ok(())
}

/// A directory where an output name is taken by a directory fails with a write error
#[test]
fn test_write_listing_withBlockedOutput_shouldReturnWriteError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = common::create_empty_dir(temp_dir.path(), "en-US")?;
    fs::create_dir(dir.join("short-description.txt"))?;
    let directory = ListingDirectory::new(&dir);

    let result = TextWriterService::new().write_listing(&directory, &sample_listing());

    match result {
        Err(ExtractError::Write { path, .. }) => assert_eq!(path, dir.join("short-description.txt")),
        other => panic!("expected write error, got {:?}", other),
    }
    // Title was written before the failure and is left in place
    assert!(dir.join("title.txt").is_file());
    assert!(!dir.join("full-description.txt").exists());
    Ok(())
}
