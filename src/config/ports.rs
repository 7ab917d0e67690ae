use std::io;
use crate::config::config::FailurePolicy;
use crate::models::extraction::ExtractionOutput;

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub root: String,
    pub include: Vec<String>,
    pub exclude: Option<Vec<String>>,
    pub failure_policy: FailurePolicy,
    pub no_progress: bool,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}

// 擷取執行的 Port
pub trait ExtractionPort {
    fn execute(&self, config: AppConfig) -> io::Result<ExtractionOutput>;
}
