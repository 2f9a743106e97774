//! Response-body helpers shared by the HTTP adapters.

use serde::Deserialize;

const PREVIEW_CHAR_LIMIT: usize = 160;

/// Whitespace-compacted prefix of a response body, for error messages.
pub(crate) fn body_preview(body: &[u8]) -> String {
    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[derive(Deserialize)]
struct ProviderErrorDto {
    message: Option<String>,
}

/// Message to report for a non-success response.
///
/// Both providers answer errors with a JSON object carrying `message`; when
/// that is absent the body preview is used, and the status code as a last
/// resort.
pub(crate) fn error_message(status: u16, body: &[u8]) -> String {
    let provider_message = serde_json::from_slice::<ProviderErrorDto>(body)
        .ok()
        .and_then(|dto| dto.message)
        .filter(|message| !message.trim().is_empty());
    match provider_message {
        Some(message) => message,
        None => {
            let preview = body_preview(body);
            if preview.is_empty() {
                format!("status {status}")
            } else {
                format!("status {status}: {preview}")
            }
        }
    }
}
