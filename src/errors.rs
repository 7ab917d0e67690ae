use std::io;
use std::path::PathBuf;
use thiserror::Error;

// 擷取流程的錯誤分類
#[derive(Error, Debug)]
pub enum ExtractError {
    /// google_play.xml 不存在或無法讀取
    #[error("找不到或無法讀取輸入檔案 '{}': {source}", path.display())]
    MissingInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// XML 格式錯誤
    #[error("XML 解析失敗 '{}': {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// 缺少欄位元素，或元素沒有文字內容
    #[error("'{}' 缺少元素 <{element}> 或其沒有文字內容", path.display())]
    MissingField { path: PathBuf, element: String },

    #[error("無法寫入輸出檔案 '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("無法讀取根目錄 '{}': {source}", path.display())]
    ReadRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("配置錯誤: {0}")]
    Config(String),
}

impl From<ExtractError> for io::Error {
    fn from(err: ExtractError) -> Self {
        let kind = match &err {
            ExtractError::MissingInput { .. } => io::ErrorKind::NotFound,
            ExtractError::Parse { .. } | ExtractError::MissingField { .. } => io::ErrorKind::InvalidData,
            ExtractError::Config(_) => io::ErrorKind::InvalidInput,
            ExtractError::Write { source, .. } | ExtractError::ReadRoot { source, .. } => source.kind(),
        };
        io::Error::new(kind, err)
    }
}
