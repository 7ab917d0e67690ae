use std::io;
use std::path::PathBuf;
use log::{error, info};
use crate::config::ports::{AppConfig, ExtractionPort};
use crate::config::config::FailurePolicy;
use crate::errors::ExtractError;
use crate::facade::traits::i_extraction::ExtractionFacadeTrait;
use crate::models::extraction::{
    DirectoryCollectInput, DirectoryFailure, DirectoryReport, ExtractionInput, ExtractionOutput,
};
use crate::models::listing::ListingDirectory;
use crate::service::directory::DirectoryService;
use crate::service::traits::i_service::{DirectoryServiceTrait, ListingServiceTrait, WriterServiceTrait};
use crate::service::writer::TextWriterService;
use crate::service::xml::XmlListingService;
use crate::utils::utils::create_progress_bar;

pub struct ExtractionFacade {
    directory_service: Box<dyn DirectoryServiceTrait>,
    listing_service: Box<dyn ListingServiceTrait>,
    writer_service: Box<dyn WriterServiceTrait>,
}

impl ExtractionFacade {
    pub fn new(
        directory_service: Box<dyn DirectoryServiceTrait>,
        listing_service: Box<dyn ListingServiceTrait>,
        writer_service: Box<dyn WriterServiceTrait>,
    ) -> Self {
        ExtractionFacade {
            directory_service,
            listing_service,
            writer_service,
        }
    }
}

impl ExtractionFacadeTrait for ExtractionFacade {
    fn execute_extraction(&self, input: ExtractionInput) -> Result<ExtractionOutput, ExtractError> {
        info!("開始擷取，根目錄：{}，失敗策略：{:?}", input.root.display(), input.failure_policy);

        let collected = self.directory_service.collect_directories(DirectoryCollectInput {
            root: input.root.clone(),
            include_patterns: input.include.clone(),
            exclude_patterns: input.exclude.clone(),
        })?;
        if collected.directories.is_empty() {
            log::warn!("{} 下沒有符合條件的語言目錄", input.root.display());
        }

        let pm = create_progress_bar(collected.directories.len() as u64, input.no_progress);
        let mut output = ExtractionOutput::default();

        for (count, directory) in collected.directories.iter().enumerate() {
            pm.update(count as u64, &directory.language);
            pm.announce(&directory.input_path().display().to_string());

            match self.process_directory(directory) {
                Ok(report) => output.processed.push(report),
                Err(err) => match input.failure_policy {
                    FailurePolicy::Abort => {
                        pm.finish(output.processed.len(), 1, collected.skipped);
                        return Err(err);
                    }
                    FailurePolicy::Continue => {
                        error!("語言 {} 處理失敗，繼續處理其他目錄：{}", directory.language, err);
                        output.failures.push(DirectoryFailure {
                            directory: directory.path.clone(),
                            error: err,
                        });
                    }
                },
            }
        }

        pm.update(collected.directories.len() as u64, "-");
        pm.finish(output.processed.len(), output.failures.len(), collected.skipped);
        Ok(output)
    }
}

impl ExtractionFacade {
    // 先完整解析，再依序寫出三個檔案
    fn process_directory(&self, directory: &ListingDirectory) -> Result<DirectoryReport, ExtractError> {
        let listing = self.listing_service.read_listing(&directory.input_path())?;
        let written = self.writer_service.write_listing(directory, &listing)?;
        info!("語言 {}：已寫出 {} 個檔案", directory.language, written.len());
        Ok(DirectoryReport {
            language: directory.language.clone(),
            directory: directory.path.clone(),
            written,
        })
    }
}

// 擷取 Port 的適配器，組裝預設服務
pub struct ExtractionAdapter;

impl ExtractionPort for ExtractionAdapter {
    fn execute(&self, config: AppConfig) -> io::Result<ExtractionOutput> {
        let facade: Box<dyn ExtractionFacadeTrait> = Box::new(ExtractionFacade::new(
            Box::new(DirectoryService::new()),
            Box::new(XmlListingService::new()),
            Box::new(TextWriterService::new()),
        ));

        let input = ExtractionInput {
            root: PathBuf::from(&config.root),
            include: config.include,
            exclude: config.exclude,
            failure_policy: config.failure_policy,
            no_progress: config.no_progress,
        };
        Ok(facade.execute_extraction(input)?)
    }
}
