use std::fs;
use std::path::Path;
use log::debug;
use quick_xml::events::Event;
use quick_xml::Reader;
use crate::errors::ExtractError;
use crate::models::listing::{Listing, ListingField, CONTENT_ELEMENT};
use crate::service::traits::i_service::ListingServiceTrait;

/// google_play.xml 解析服務
pub struct XmlListingService;

impl XmlListingService {
    pub fn new() -> Self {
        XmlListingService
    }
}

impl Default for XmlListingService {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingServiceTrait for XmlListingService {
    fn read_listing(&self, path: &Path) -> Result<Listing, ExtractError> {
        let xml = fs::read_to_string(path).map_err(|source| ExtractError::MissingInput {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("讀取 {}：{} 位元組", path.display(), xml.len());
        parse_listing(&xml, path)
    }
}

#[derive(Clone, Copy)]
enum ContentState {
    Before,
    Inside(usize),
    Done,
}

// 正在收集文字的欄位元素
struct Capture {
    field: ListingField,
    depth: usize,
    text: String,
    has_child: bool,
}

impl Capture {
    // 含子元素、註解或沒有任何文字時視為無內容
    fn finish(self) -> Option<String> {
        if self.has_child || self.text.is_empty() {
            None
        } else {
            Some(self.text)
        }
    }
}

/// 解析 XML，取出第一個 `content` 元素內的三個欄位
///
/// 欄位文字原樣保留（實體會解碼，空白不會修剪）。
/// `path` 只用於錯誤訊息。
pub fn parse_listing(xml: &str, path: &Path) -> Result<Listing, ExtractError> {
    let parse_error = |message: String| ExtractError::Parse {
        path: path.to_path_buf(),
        message,
    };

    let mut reader = Reader::from_str(xml.trim_start_matches('\u{feff}'));
    let mut depth: usize = 0;
    let mut saw_root = false;
    let mut content = ContentState::Before;
    let mut capture: Option<Capture> = None;
    // 外層 None：未出現；內層 None：出現但沒有文字
    let mut slots: [Option<Option<String>>; 3] = [None, None, None];

    loop {
        let event = reader.read_event().map_err(|e| {
            parse_error(format!("位置 {}：{}", reader.buffer_position(), e))
        })?;
        match event {
            Event::Start(e) => {
                depth += 1;
                saw_root = true;
                let name = e.name();
                if let Some(cap) = capture.as_mut() {
                    cap.has_child = true;
                    continue;
                }
                match content {
                    ContentState::Before if name.as_ref() == CONTENT_ELEMENT.as_bytes() => {
                        content = ContentState::Inside(depth);
                    }
                    ContentState::Inside(_) => {
                        if let Some(field) = ListingField::from_element_name(name.as_ref()) {
                            if slots[field.index()].is_none() {
                                capture = Some(Capture {
                                    field,
                                    depth,
                                    text: String::new(),
                                    has_child: false,
                                });
                            }
                        }
                    }
                    _ => {}
                }
            }
            Event::Empty(e) => {
                saw_root = true;
                let name = e.name();
                if let Some(cap) = capture.as_mut() {
                    cap.has_child = true;
                    continue;
                }
                match content {
                    ContentState::Before if name.as_ref() == CONTENT_ELEMENT.as_bytes() => {
                        content = ContentState::Done;
                    }
                    ContentState::Inside(_) => {
                        if let Some(field) = ListingField::from_element_name(name.as_ref()) {
                            let slot = &mut slots[field.index()];
                            if slot.is_none() {
                                *slot = Some(None);
                            }
                        }
                    }
                    _ => {}
                }
            }
            Event::Text(e) => {
                if let Some(cap) = capture.as_mut() {
                    if cap.depth == depth {
                        let text = e.unescape().map_err(|err| parse_error(err.to_string()))?;
                        cap.text.push_str(&text);
                    }
                }
            }
            Event::CData(e) => {
                if let Some(cap) = capture.as_mut() {
                    if cap.depth == depth {
                        let text = reader
                            .decoder()
                            .decode(&e)
                            .map_err(|err| parse_error(err.to_string()))?;
                        cap.text.push_str(&text);
                    }
                }
            }
            Event::End(_) => {
                if capture.as_ref().is_some_and(|cap| cap.depth == depth) {
                    if let Some(cap) = capture.take() {
                        let index = cap.field.index();
                        slots[index] = Some(cap.finish());
                    }
                }
                if let ContentState::Inside(content_depth) = content {
                    if content_depth == depth {
                        content = ContentState::Done;
                    }
                }
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| parse_error("多出的結束標籤".to_string()))?;
            }
            // 欄位文字中夾雜註解或處理指令時，不再視為單一文字
            Event::Comment(_) | Event::PI(_) => {
                if let Some(cap) = capture.as_mut() {
                    if cap.depth == depth {
                        cap.has_child = true;
                    }
                }
            }
            Event::Eof => break,
            // 宣告與 DOCTYPE 不影響欄位
            _ => {}
        }
    }

    if depth != 0 {
        return Err(parse_error(format!("文件結束時仍有 {} 個未關閉的元素", depth)));
    }
    if !saw_root {
        return Err(parse_error("文件沒有根元素".to_string()));
    }
    if matches!(content, ContentState::Before) {
        return Err(ExtractError::MissingField {
            path: path.to_path_buf(),
            element: CONTENT_ELEMENT.to_string(),
        });
    }

    let [title, short_description, full_description] = slots;
    let require = |slot: Option<Option<String>>, field: ListingField| {
        slot.flatten().ok_or_else(|| ExtractError::MissingField {
            path: path.to_path_buf(),
            element: field.element_name().to_string(),
        })
    };

    Ok(Listing {
        title: require(title, ListingField::Title)?,
        short_description: require(short_description, ListingField::ShortDescription)?,
        full_description: require(full_description, ListingField::FullDescription)?,
    })
}
