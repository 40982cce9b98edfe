use base64::{Engine as _, engine::general_purpose::STANDARD};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid base64 text: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// Standard-alphabet base64 with `+` and `/` swapped for `-` and `_`,
/// padding kept, so a frame can travel inside a URL or query string.
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes).replace('+', "-").replace('/', "_")
}

/// Accepts both the swapped and the standard alphabet.
pub fn from_base64(text: &str) -> Result<Vec<u8>, TransportError> {
    let standard = text.replace('-', "+").replace('_', "/");
    Ok(STANDARD.decode(standard)?)
}
