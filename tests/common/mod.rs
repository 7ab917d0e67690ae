/*!
 * Common test utilities for the play_listings test suite
 */

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use tempfile::TempDir;
use play_listings::config::config::FailurePolicy;
use play_listings::facade::extraction_facade::ExtractionFacade;
use play_listings::models::extraction::ExtractionInput;
use play_listings::service::directory::DirectoryService;
use play_listings::service::writer::TextWriterService;
use play_listings::service::xml::XmlListingService;

/// Creates a temporary root directory for listings
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Builds a google_play.xml document from the three field values
pub fn listing_xml(title: &str, short: &str, full: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<listing>\n  <content>\n    <title>{}</title>\n    <shortDescription>{}</shortDescription>\n    <fullDescription>{}</fullDescription>\n  </content>\n</listing>\n",
        title, short, full
    )
}

/// Creates `<root>/<language>/google_play.xml` with the given content
pub fn create_listing_dir(root: &Path, language: &str, xml: &str) -> Result<PathBuf> {
    let dir = root.join(language);
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("google_play.xml"), xml)?;
    Ok(dir)
}

/// Creates a language directory without an input document
pub fn create_empty_dir(root: &Path, language: &str) -> Result<PathBuf> {
    let dir = root.join(language);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn default_facade() -> ExtractionFacade {
    ExtractionFacade::new(
        Box::new(DirectoryService::new()),
        Box::new(XmlListingService::new()),
        Box::new(TextWriterService::new()),
    )
}

pub fn extraction_input(root: &Path, failure_policy: FailurePolicy) -> ExtractionInput {
    ExtractionInput {
        root: root.to_path_buf(),
        include: vec!["*".to_string()],
        exclude: None,
        failure_policy,
        no_progress: true,
    }
}
