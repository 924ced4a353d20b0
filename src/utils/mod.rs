//! Utility modules

pub mod activity_log;
pub mod cache;
pub mod markdown;
pub mod roi;
pub mod storage;
pub mod store;
pub mod upload;

use base64::Engine;

// Shared helpers

/// Base64 encode
pub fn encode_base64(data: &str) -> Option<String> {
    Some(base64::engine::general_purpose::STANDARD.encode(data.as_bytes()))
}

/// Base64 decode
pub fn decode_base64(data: &str) -> Option<String> {
    base64::engine::general_purpose::STANDARD
        .decode(data)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
}

/// Current time as an ISO-8601 string. Browser clock on wasm; empty on
/// native targets (only tests run there).
pub fn now_iso() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::new_0()
            .to_iso_string()
            .as_string()
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_round_trip() {
        let encoded = encode_base64("hello, world").unwrap();
        assert_eq!(decode_base64(&encoded).unwrap(), "hello, world");
    }

    #[test]
    fn test_base64_rejects_garbage() {
        assert_eq!(decode_base64("!!not base64!!"), None);
    }
}
