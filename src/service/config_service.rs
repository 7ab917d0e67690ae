use std::io;
use crate::config::config::FailurePolicy;
use crate::config::ports::{AppConfig, ConfigPort};

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// 預設配置適配器：所有語言、遇錯中止、顯示進度條
pub struct DefaultConfigAdapter {
    root: String,
}

impl DefaultConfigAdapter {
    pub fn new(root: String) -> Self {
        DefaultConfigAdapter { root }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        crate::config::config::validate_root_path(&self.root)?;
        Ok(AppConfig {
            root: self.root.clone(),
            include: vec!["*".to_string()],
            exclude: None,
            failure_policy: FailurePolicy::Abort,
            no_progress: false,
        })
    }
}
