use std::io;
use clap::Parser;
use crate::action::interactive::process_interactive_mode;
use crate::config::config::{Cli, validate_root_path, validate_language_patterns};
use crate::config::ports::{AppConfig, ConfigPort, ExtractionPort};
use crate::facade::extraction_facade::ExtractionAdapter;
use crate::models::extraction::ExtractionOutput;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::utils::setup_logging;

pub fn process_args() -> io::Result<ExtractionOutput> {
    let cli = Cli::parse();
    if cli.interactive {
        process_interactive_mode()
    } else {
        process_cli_mode(cli)
    }
}

pub fn process_cli_mode(cli: Cli) -> io::Result<ExtractionOutput> {
    setup_logging(&cli.log_level.clone().unwrap_or("info".to_string()))?;

    // 檢查是否僅提供根目錄（預設配置）
    let is_default_config = cli.include.is_none()
        && cli.exclude.is_none()
        && cli.on_error.is_none()
        && !cli.no_progress
        && cli.log_level.is_none();

    // 選擇配置適配器
    let config_port: Box<dyn ConfigPort> = if is_default_config {
        log::info!("未提供選項參數，使用預設配置：處理所有語言，遇錯中止");
        Box::new(DefaultConfigAdapter::new(cli.root.clone()))
    } else {
        Box::new(CliConfigAdapter::new(cli.clone()))
    };

    let config_service = ConfigService::new(config_port);
    let config = config_service.get_config()?;

    // 若啟用 --show-config，在擷取前顯示配置，失敗時也看得到
    if cli.show_config {
        println!("實際使用的配置：{:#?}", config);
    }

    let extraction_port: Box<dyn ExtractionPort> = Box::new(ExtractionAdapter);
    extraction_port.execute(config)
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        // 驗證根目錄
        validate_root_path(&self.cli.root)?;

        let include = self.cli.include.clone().unwrap_or(vec!["*".to_string()]);
        // 驗證語言模式
        validate_language_patterns(&include, &self.cli.exclude)?;

        Ok(AppConfig {
            root: self.cli.root.clone(),
            include,
            exclude: self.cli.exclude.clone(),
            failure_policy: self.cli.on_error.unwrap_or_default(),
            no_progress: self.cli.no_progress,
        })
    }
}
