use std::path::{Path, PathBuf};
use crate::errors::ExtractError;
use crate::models::extraction::{DirectoryCollectInput, DirectoryCollectOutput};
use crate::models::listing::{Listing, ListingDirectory};

// Directory 服務接口，負責收集語言目錄
pub trait DirectoryServiceTrait: Send + Sync {
    /// 收集根目錄下符合條件的語言目錄
    /// # 參數
    /// - input: 根目錄與包含/排除模式
    /// # 回傳
    /// - 成功時返回目錄列表與跳過的項目數，根目錄無法讀取時返回錯誤
    fn collect_directories(&self, input: DirectoryCollectInput) -> Result<DirectoryCollectOutput, ExtractError>;
}

// Listing 服務接口，負責解析 google_play.xml
pub trait ListingServiceTrait: Send + Sync {
    /// 讀取並解析單一輸入檔案
    /// # 參數
    /// - path: google_play.xml 的路徑
    /// # 回傳
    /// - 成功時返回三個欄位的文字，失敗時返回 MissingInput、Parse 或 MissingField 錯誤
    fn read_listing(&self, path: &Path) -> Result<Listing, ExtractError>;
}

// Writer 服務接口，負責寫出文字檔
pub trait WriterServiceTrait: Send + Sync {
    /// 將三個欄位分別寫入目錄中的文字檔，覆寫既有檔案
    fn write_listing(&self, directory: &ListingDirectory, listing: &Listing) -> Result<Vec<PathBuf>, ExtractError>;
}
