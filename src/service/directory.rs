use std::io;
use log::{debug, info};
use walkdir::WalkDir;
use crate::errors::ExtractError;
use crate::models::extraction::{DirectoryCollectInput, DirectoryCollectOutput};
use crate::models::listing::ListingDirectory;
use crate::service::traits::i_service::DirectoryServiceTrait;
use crate::utils::utils::create_regex_sets;

/// 目錄服務，只看根目錄的第一層
pub struct DirectoryService;

impl DirectoryService {
    pub fn new() -> Self {
        DirectoryService
    }
}

impl Default for DirectoryService {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryServiceTrait for DirectoryService {
    fn collect_directories(&self, input: DirectoryCollectInput) -> Result<DirectoryCollectOutput, ExtractError> {
        let exclude = input.exclude_patterns.clone().unwrap_or_default();
        let (include_set, exclude_set) = create_regex_sets(&input.include_patterns, &exclude);

        let mut directories = Vec::new();
        let mut skipped = 0;

        for entry in WalkDir::new(&input.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| ExtractError::ReadRoot {
                path: input.root.clone(),
                source: io::Error::from(e),
            })?;
            let path = entry.path();

            // 只處理目錄，檔案直接跳過
            if !path.is_dir() {
                debug!("跳過非目錄項目：{}", path.display());
                skipped += 1;
                continue;
            }

            let directory = ListingDirectory::new(path);
            if !include_set.is_match(&directory.language) || exclude_set.is_match(&directory.language) {
                debug!("語言 {} 不符合包含/排除模式，跳過", directory.language);
                skipped += 1;
                continue;
            }
            directories.push(directory);
        }

        info!(
            "在 {} 找到 {} 個語言目錄，跳過 {} 個項目",
            input.root.display(),
            directories.len(),
            skipped
        );
        Ok(DirectoryCollectOutput { directories, skipped })
    }
}
