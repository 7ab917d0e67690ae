use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use log::debug;
use crate::errors::ExtractError;
use crate::models::listing::{Listing, ListingDirectory, ListingField};
use crate::service::traits::i_service::WriterServiceTrait;

/// 文字檔寫出服務
pub struct TextWriterService;

impl TextWriterService {
    pub fn new() -> Self {
        TextWriterService
    }
}

impl Default for TextWriterService {
    fn default() -> Self {
        Self::new()
    }
}

impl WriterServiceTrait for TextWriterService {
    fn write_listing(&self, directory: &ListingDirectory, listing: &Listing) -> Result<Vec<PathBuf>, ExtractError> {
        let mut written = Vec::with_capacity(ListingField::ALL.len());
        // 依序寫出，任一失敗即停止該目錄的後續寫入
        for field in ListingField::ALL {
            let path = directory.output_path(field);
            write_text_file(&path, listing.get(field))?;
            debug!("寫入 {}：{} 位元組", path.display(), listing.get(field).len());
            written.push(path);
        }
        Ok(written)
    }
}

/// 以原樣內容覆寫檔案
pub fn write_text_file(path: &Path, content: &str) -> Result<(), ExtractError> {
    let to_write_error = |source| ExtractError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes()).map_err(to_write_error)?;
    writer.flush().map_err(to_write_error)?;
    Ok(())
}
