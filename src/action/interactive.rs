use dialoguer::{Confirm, Input, Select};
use std::io;
use std::path::Path;

use crate::config::config::{FailurePolicy, validate_language_patterns};
use crate::config::ports::{AppConfig, ConfigPort, ExtractionPort};
use crate::facade::extraction_facade::ExtractionAdapter;
use crate::models::extraction::ExtractionOutput;
use crate::models::listing::INPUT_FILE_NAME;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::utils::setup_logging;

pub fn process_interactive_mode() -> io::Result<ExtractionOutput> {
    println!("=== 歡迎使用互動模式 ===");
    setup_logging("info")?;
    let use_default_config = get_default_config_option()?;
    let root = get_root_path()?;

    let config_port: Box<dyn ConfigPort> = if use_default_config {
        println!("使用預設配置：處理所有語言，遇錯中止");
        Box::new(DefaultConfigAdapter::new(root.clone()))
    } else {
        Box::new(InteractiveConfigAdapter::new(root.clone()))
    };

    let config = ConfigService::new(config_port).get_config()?;
    if !confirm_overwrite(&config.root)? {
        println!("已取消");
        return Ok(ExtractionOutput::default());
    }

    let output = ExtractionAdapter.execute(config.clone())?;
    println!("實際使用的配置：{:#?}", config);
    Ok(output)
}

pub fn get_default_config_option() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("是否使用預設配置？（處理所有語言目錄，遇到錯誤即中止）")
        .default(true)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("預設配置選擇失敗: {}", e)))
}

pub fn get_root_path() -> io::Result<String> {
    Input::new()
        .with_prompt("請輸入包含各語言目錄的根目錄（預設為目前目錄）")
        .default(".".to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            if Path::new(input).is_dir() { Ok(()) } else { Err(format!("目錄 '{}' 不存在", input)) }
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_failure_policy() -> io::Result<FailurePolicy> {
    let policy = Select::new()
        .with_prompt("某個語言目錄處理失敗時（使用方向鍵選擇，按 Enter 確認）")
        .items(&["中止 - 遇到第一個錯誤即停止（預設）", "繼續 - 記錄錯誤並處理其他目錄"])
        .default(0)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("失敗策略選擇失敗: {}", e)))?;
    Ok(match policy {
        1 => FailurePolicy::Continue,
        _ => FailurePolicy::Abort,
    })
}

pub fn get_language_patterns() -> io::Result<(Vec<String>, Option<Vec<String>>)> {
    let include = split_patterns(
        Input::new()
            .with_prompt("輸入包含的語言（例如：en*,de，預設為 *）")
            .default("*".to_string())
            .interact_text()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("包含模式輸入失敗: {}", e)))?,
    );

    let exclude = split_patterns(
        Input::new()
            .with_prompt("輸入排除的語言（例如：en-GB，預設為空）")
            .default("".to_string())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("排除模式輸入失敗: {}", e)))?,
    );

    Ok((include, if exclude.is_empty() { None } else { Some(exclude) }))
}

pub fn split_patterns(raw: String) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn confirm_overwrite(root: &str) -> io::Result<bool> {
    Confirm::new()
        .with_prompt(format!(
            "將覆寫 {} 下各語言目錄中由 {} 產生的文字檔，是否繼續？",
            root, INPUT_FILE_NAME
        ))
        .default(true)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("確認輸入失敗: {}", e)))
}

// 交互配置適配器
pub struct InteractiveConfigAdapter {
    root: String,
}

impl InteractiveConfigAdapter {
    pub fn new(root: String) -> Self {
        InteractiveConfigAdapter { root }
    }
}

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let (include, exclude) = get_language_patterns()?;
        validate_language_patterns(&include, &exclude)?;
        let failure_policy = get_failure_policy()?;

        Ok(AppConfig {
            root: self.root.clone(),
            include: if include.is_empty() { vec!["*".to_string()] } else { include },
            exclude,
            failure_policy,
            no_progress: false,
        })
    }
}
