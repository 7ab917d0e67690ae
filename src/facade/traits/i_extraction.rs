use crate::errors::ExtractError;
use crate::models::extraction::{ExtractionInput, ExtractionOutput};

// Facade 接口，負責協調整個擷取流程
pub trait ExtractionFacadeTrait: Send + Sync {
    /// 對根目錄下的每個語言目錄執行擷取
    /// # 參數
    /// - input: 根目錄、語言模式與失敗策略
    /// # 回傳
    /// - 中止策略下遇到第一個錯誤即返回該錯誤；繼續策略下失敗會收集在輸出中
    fn execute_extraction(&self, input: ExtractionInput) -> Result<ExtractionOutput, ExtractError>;
}
