//! Simulated document upload
//!
//! Timer-based mock used by the settings view: validates the selected file,
//! then "uploads" it with injected random transient failures and
//! exponential-backoff retries. No cancellation; attempts are short.

use thiserror::Error;

const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "png", "jpg", "jpeg", "md", "txt", "csv"];
pub const MAX_SIZE_BYTES: f64 = 10.0 * 1024.0 * 1024.0;
pub const MAX_ATTEMPTS: u32 = 3;
const BASE_DELAY_MS: u32 = 400;
const FAILURE_RATE: f64 = 0.3;

#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest {
    pub file_name: String,
    pub size_bytes: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadReceipt {
    pub file_name: String,
    pub size_bytes: f64,
    pub attempts: u32,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UploadError {
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),
    #[error("file exceeds the 10 MiB limit")]
    TooLarge,
    #[error("upload failed after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },
}

/// Validation errors are terminal; they are never retried.
pub fn validate(request: &UploadRequest) -> Result<(), UploadError> {
    let extension = request
        .file_name
        .rsplit('.')
        .next()
        .filter(|ext| *ext != request.file_name)
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(UploadError::UnsupportedType(extension));
    }
    if request.size_bytes > MAX_SIZE_BYTES {
        return Err(UploadError::TooLarge);
    }
    Ok(())
}

/// Delay before retrying `attempt` (zero-based): 400ms, 800ms, 1600ms, ...
pub fn backoff_delay_ms(attempt: u32) -> u32 {
    BASE_DELAY_MS * 2u32.pow(attempt)
}

/// Runs the simulated transfer. Each attempt fails with fixed probability;
/// exhausting `MAX_ATTEMPTS` surfaces a terminal error to the caller.
pub async fn upload_with_retry(request: UploadRequest) -> Result<UploadReceipt, UploadError> {
    use crate::utils::activity_log;
    use gloo::timers::future::TimeoutFuture;

    validate(&request)?;

    for attempt in 0..MAX_ATTEMPTS {
        TimeoutFuture::new(backoff_delay_ms(attempt)).await;
        if js_sys::Math::random() >= FAILURE_RATE {
            activity_log::log_info(
                "upload",
                &format!("{} uploaded on attempt {}", request.file_name, attempt + 1),
            );
            return Ok(UploadReceipt {
                file_name: request.file_name,
                size_bytes: request.size_bytes,
                attempts: attempt + 1,
            });
        }
        activity_log::log_warn(
            "upload",
            &format!("transient failure for {} (attempt {})", request.file_name, attempt + 1),
        );
    }

    activity_log::log_error(
        "upload",
        &format!("{} failed after {} attempts", request.file_name, MAX_ATTEMPTS),
    );
    Err(UploadError::RetriesExhausted {
        attempts: MAX_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, size: f64) -> UploadRequest {
        UploadRequest {
            file_name: name.to_string(),
            size_bytes: size,
        }
    }

    #[test]
    fn test_accepts_allowed_extensions() {
        for name in ["report.pdf", "scan.PNG", "notes.md", "data.csv"] {
            assert_eq!(validate(&request(name, 1024.0)), Ok(()));
        }
    }

    #[test]
    fn test_rejects_unsupported_type() {
        assert_eq!(
            validate(&request("tool.exe", 1024.0)),
            Err(UploadError::UnsupportedType("exe".to_string()))
        );
    }

    #[test]
    fn test_rejects_missing_extension() {
        assert!(matches!(
            validate(&request("README", 10.0)),
            Err(UploadError::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_rejects_oversized_file() {
        assert_eq!(
            validate(&request("big.pdf", MAX_SIZE_BYTES + 1.0)),
            Err(UploadError::TooLarge)
        );
        // boundary is inclusive
        assert_eq!(validate(&request("fits.pdf", MAX_SIZE_BYTES)), Ok(()));
    }

    #[test]
    fn test_backoff_doubles() {
        assert_eq!(backoff_delay_ms(0), 400);
        assert_eq!(backoff_delay_ms(1), 800);
        assert_eq!(backoff_delay_ms(2), 1600);
    }

    #[test]
    fn test_error_messages() {
        let err = UploadError::RetriesExhausted { attempts: 3 };
        assert_eq!(err.to_string(), "upload failed after 3 attempts");
        assert_eq!(UploadError::TooLarge.to_string(), "file exceeds the 10 MiB limit");
    }
}
