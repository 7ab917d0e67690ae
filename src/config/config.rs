use clap::{Parser, ValueEnum};
use std::io;
use std::path::Path;

#[derive(Parser, Clone)]
#[command(
    name = "play_listings",
    about = "從各語言目錄的 google_play.xml 擷取 Google Play 商店文字",
    long_about = "一個將 Google Play 商店頁面 XML 轉換為純文字檔的工具。\n對根目錄下的每個語言目錄讀取 google_play.xml，並寫出 title.txt、short-description.txt、full-description.txt。\n未指定根目錄時使用目前目錄。使用 `--help` 查看詳細用法。"
)]
pub struct Cli {
    /// 包含各語言目錄的根目錄
    #[arg(default_value = ".")]
    pub root: String,
    #[arg(long, value_delimiter = ',')]
    pub include: Option<Vec<String>>,
    #[arg(long, value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,
    #[arg(long, value_enum)]
    pub on_error: Option<FailurePolicy>,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, value_parser = ["info", "warn", "error"])]
    pub log_level: Option<String>,
    #[arg(long, default_value_t = false)]
    pub interactive: bool,
    #[arg(long, default_value_t = false)]
    pub show_config: bool,
}

/// 某個目錄處理失敗時的行為
#[derive(Clone, Copy, ValueEnum, PartialEq, Eq, Debug, Default)]
pub enum FailurePolicy {
    /// 遇到第一個錯誤即中止整個執行
    #[default]
    Abort,
    /// 記錄錯誤並繼續處理其他目錄
    Continue,
}

pub fn validate_root_path(root: &str) -> io::Result<&Path> {
    let path = Path::new(root);
    if !path.is_dir() {
        log::error!("根目錄不存在或不是目錄：{}", root);
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("根目錄 '{}' 不存在或不是目錄", root)
        ));
    }
    Ok(path)
}

pub fn is_valid_pattern(pattern: &str) -> bool {
    let invalid_chars = ['/', '\\', ':', '?', '"', '<', '>', '|'];
    !pattern.is_empty() && !pattern.contains(&invalid_chars[..])
}

pub fn validate_language_patterns(include: &[String], exclude: &Option<Vec<String>>) -> io::Result<()> {
    for pattern in include {
        if !is_valid_pattern(pattern) {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, format!("無效的包含模式: {}", pattern)));
        }
    }
    if let Some(exclude_patterns) = exclude {
        for pattern in exclude_patterns {
            if !is_valid_pattern(pattern) {
                return Err(io::Error::new(io::ErrorKind::InvalidInput, format!("無效的排除模式: {}", pattern)));
            }
        }
    }
    Ok(())
}
