use std::io;
use std::time::Instant;
use indicatif::{ProgressBar, ProgressStyle};
use regex::RegexSet;

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    // 互動模式可能已初始化過 logger
    if env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init()
        .is_err()
    {
        log::debug!("logger 已初始化，略過");
    }
    Ok(())
}

pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
    start: Instant,
}

impl ProgressManager {
    pub fn new(total: u64, no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(total);
            let style = ProgressStyle::default_bar()
                .template("{msg} [{bar:40}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("##-");
            pb.set_style(style);
            pb
        };
        ProgressManager {
            pb,
            no_progress,
            start: Instant::now(),
        }
    }

    /// 處理目錄前輸出目前的輸入檔案路徑
    pub fn announce(&self, line: &str) {
        // 非終端機時 indicatif 會隱藏進度條，println 也不會輸出
        if self.prints_directly() {
            println!("{}", line);
        } else {
            self.pb.suspend(|| println!("{}", line));
        }
    }

    pub fn prints_directly(&self) -> bool {
        self.no_progress || self.pb.is_hidden()
    }

    pub fn update(&self, count: u64, language: &str) {
        if self.no_progress {
            return;
        }
        self.pb.set_message(format!("處理中：{}", language));
        self.pb.set_position(count);
    }

    pub fn finish(&self, processed: usize, failed: usize, skipped: usize) {
        let elapsed = self.start.elapsed().as_secs_f64();
        log::info!(
            "完成，共處理 {} 個目錄，失敗 {} 個，跳過 {} 個項目，耗時 {:.2} 秒",
            processed, failed, skipped, elapsed
        );
        if self.no_progress {
            return;
        }
        self.pb.finish_with_message(format!(
            "完成，共 {} 個目錄，失敗 {} 個",
            processed, failed
        ));
    }
}

pub fn create_progress_bar(total: u64, no_progress: bool) -> ProgressManager {
    ProgressManager::new(total, no_progress)
}

/// 將萬用字元模式（`*`）轉為完整比對的正則表達式
pub fn wildcard_to_regex(pattern: &str) -> String {
    format!("^{}$", regex::escape(pattern).replace("\\*", ".*"))
}

pub fn create_regex_sets(include: &[String], exclude: &[String]) -> (RegexSet, RegexSet) {
    let include_patterns: Vec<_> = include.iter().map(|p| wildcard_to_regex(p)).collect();
    let exclude_patterns: Vec<_> = exclude.iter().map(|p| wildcard_to_regex(p)).collect();

    let include_set = RegexSet::new(&include_patterns)
        .unwrap_or_else(|e| {
            log::warn!("無效的包含模式: {}，使用空集作為回退", e);
            RegexSet::empty()
        });

    let exclude_set = RegexSet::new(&exclude_patterns)
        .unwrap_or_else(|e| {
            log::warn!("無效的排除模式: {}，使用空集作為回退", e);
            RegexSet::empty()
        });

    (include_set, exclude_set)
}
