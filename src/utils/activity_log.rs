//! Activity log
//!
//! Ring buffer of recent app events, mirrored to the browser console and
//! persisted to local storage so a session can be inspected after the fact.
//! Exportable from the settings view as JSON (clipboard or file download).

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use wasm_bindgen::prelude::*;

const MAX_LOG_ENTRIES: usize = 500;
#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "app_activity_log";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String, // "info", "warn", "error"
    pub category: String, // "store", "upload", "roi", "nav", "ui-action"
    pub message: String,
}

pub struct ActivityLog {
    entries: VecDeque<LogEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        let mut log = ActivityLog {
            entries: VecDeque::with_capacity(MAX_LOG_ENTRIES),
        };
        log.load_from_storage();
        log
    }

    pub fn log(&mut self, level: &str, category: &str, message: &str) {
        let entry = LogEntry {
            timestamp: crate::utils::now_iso(),
            level: level.to_string(),
            category: category.to_string(),
            message: message.to_string(),
        };

        // Console mirror is browser-only; native test runs keep the buffer.
        #[cfg(target_arch = "wasm32")]
        {
            let line = format!("[{}] {}", category, message);
            match level {
                "error" => web_sys::console::error_1(&line.into()),
                "warn" => web_sys::console::warn_1(&line.into()),
                _ => web_sys::console::log_1(&line.into()),
            }
        }

        if self.entries.len() >= MAX_LOG_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
        self.save_to_storage();
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn to_json(&self) -> String {
        let entries: Vec<&LogEntry> = self.entries.iter().collect();
        serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.save_to_storage();
    }

    #[cfg(target_arch = "wasm32")]
    fn load_from_storage(&mut self) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(raw)) = storage.get_item(STORAGE_KEY) {
                    if let Ok(entries) = serde_json::from_str::<Vec<LogEntry>>(&raw) {
                        self.entries = entries.into_iter().collect();
                    }
                }
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn load_from_storage(&mut self) {}

    #[cfg(target_arch = "wasm32")]
    fn save_to_storage(&self) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let raw = serde_json::to_string(&self.entries()).unwrap_or_else(|_| "[]".to_string());
                let _ = storage.set_item(STORAGE_KEY, &raw);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save_to_storage(&self) {}

    /// Offers the log as a JSON file download.
    pub fn download(&self) {
        let json = self.to_json();
        let timestamp = crate::utils::now_iso();
        let filename = format!(
            "activity_log_{}.json",
            timestamp.replace(':', "-").replace('.', "-")
        );

        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                let blob_parts = js_sys::Array::new();
                blob_parts.push(&JsValue::from_str(&json));

                let options = web_sys::BlobPropertyBag::new();
                options.set_type("application/json");

                if let Ok(blob) =
                    web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &options)
                {
                    if let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) {
                        if let Ok(a) = document.create_element("a") {
                            let _ = a.set_attribute("href", &url);
                            let _ = a.set_attribute("download", &filename);
                            if let Some(element) = a.dyn_ref::<web_sys::HtmlElement>() {
                                element.click();
                            }
                            let _ = web_sys::Url::revoke_object_url(&url);
                        }
                    }
                }
            }
        }
    }
}

thread_local! {
    static ACTIVITY_LOG: std::cell::RefCell<ActivityLog> =
        std::cell::RefCell::new(ActivityLog::new());
}

pub fn log_info(category: &str, message: &str) {
    ACTIVITY_LOG.with(|log| log.borrow_mut().log("info", category, message));
}

pub fn log_warn(category: &str, message: &str) {
    ACTIVITY_LOG.with(|log| log.borrow_mut().log("warn", category, message));
}

pub fn log_error(category: &str, message: &str) {
    ACTIVITY_LOG.with(|log| log.borrow_mut().log("error", category, message));
}

pub fn entries() -> Vec<LogEntry> {
    ACTIVITY_LOG.with(|log| log.borrow().entries())
}

pub fn to_json() -> String {
    ACTIVITY_LOG.with(|log| log.borrow().to_json())
}

pub fn clear() {
    ACTIVITY_LOG.with(|log| log.borrow_mut().clear());
}

pub fn download() {
    ACTIVITY_LOG.with(|log| log.borrow().download());
}

pub async fn copy_to_clipboard() -> Result<(), String> {
    let json = to_json();
    let window = web_sys::window().ok_or("window unavailable")?;
    let clipboard = window.navigator().clipboard();
    let result = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&json)).await;
    match result {
        Ok(_) => {
            log_info("ui-action", "activity log copied to clipboard");
            Ok(())
        }
        Err(e) => {
            let message = format!("clipboard copy failed: {:?}", e);
            log_error("ui-action", &message);
            Err(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_caps_entries() {
        let mut log = ActivityLog::new();
        for i in 0..(MAX_LOG_ENTRIES + 10) {
            log.log("info", "test", &format!("entry {i}"));
        }
        let entries = log.entries();
        assert_eq!(entries.len(), MAX_LOG_ENTRIES);
        // oldest entries were evicted first
        assert_eq!(entries[0].message, "entry 10");
    }

    #[test]
    fn test_clear_empties_buffer() {
        let mut log = ActivityLog::new();
        log.log("warn", "test", "one");
        log.clear();
        assert!(log.entries().is_empty());
        assert_eq!(log.to_json(), "[]");
    }
}
