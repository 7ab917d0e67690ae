use std::fmt;
use std::path::{Path, PathBuf};

/// 每個語言目錄中固定的輸入檔名
pub const INPUT_FILE_NAME: &str = "google_play.xml";

/// 包住三個欄位的元素名稱
pub const CONTENT_ELEMENT: &str = "content";

/// 商店頁面的三個文字欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingField {
    Title,
    ShortDescription,
    FullDescription,
}

impl ListingField {
    pub const ALL: [ListingField; 3] = [
        ListingField::Title,
        ListingField::ShortDescription,
        ListingField::FullDescription,
    ];

    /// XML 中的元素名稱（區分大小寫）
    pub fn element_name(self) -> &'static str {
        match self {
            ListingField::Title => "title",
            ListingField::ShortDescription => "shortDescription",
            ListingField::FullDescription => "fullDescription",
        }
    }

    /// 輸出的文字檔名
    pub fn file_name(self) -> &'static str {
        match self {
            ListingField::Title => "title.txt",
            ListingField::ShortDescription => "short-description.txt",
            ListingField::FullDescription => "full-description.txt",
        }
    }

    pub fn index(self) -> usize {
        match self {
            ListingField::Title => 0,
            ListingField::ShortDescription => 1,
            ListingField::FullDescription => 2,
        }
    }

    pub fn from_element_name(name: &[u8]) -> Option<ListingField> {
        ListingField::ALL
            .into_iter()
            .find(|field| field.element_name().as_bytes() == name)
    }
}

impl fmt::Display for ListingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_name())
    }
}

/// 從 google_play.xml 擷取出的內容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub title: String,
    pub short_description: String,
    pub full_description: String,
}

impl Listing {
    pub fn get(&self, field: ListingField) -> &str {
        match field {
            ListingField::Title => &self.title,
            ListingField::ShortDescription => &self.short_description,
            ListingField::FullDescription => &self.full_description,
        }
    }
}

/// 單一語言的商店頁面目錄，目錄名稱即語言代碼
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingDirectory {
    pub language: String,
    pub path: PathBuf,
}

impl ListingDirectory {
    pub fn new(path: &Path) -> Self {
        let language = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        ListingDirectory {
            language,
            path: path.to_path_buf(),
        }
    }

    pub fn input_path(&self) -> PathBuf {
        self.path.join(INPUT_FILE_NAME)
    }

    pub fn output_path(&self, field: ListingField) -> PathBuf {
        self.path.join(field.file_name())
    }
}
