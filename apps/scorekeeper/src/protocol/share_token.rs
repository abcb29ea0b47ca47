//! Compact, URL-safe share tokens.
//!
//! Token = base64url(no padding) of raw DEFLATE of the JSON encoding.

use std::io::{Read, Write};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::SessionState;
use crate::error::AppError;

/// Upper bound on inflated payload size; anything larger is rejected.
const MAX_INFLATED_BYTES: u64 = 1 << 20;

pub fn encode<T: Serialize>(value: &T) -> Result<String, AppError> {
    let json = serde_json::to_vec(value)?;
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(&json)
        .map_err(|e| AppError::token(format!("compress: {e}")))?;
    let compressed = encoder
        .finish()
        .map_err(|e| AppError::token(format!("compress: {e}")))?;
    Ok(URL_SAFE_NO_PAD.encode(compressed))
}

pub fn decode<T: DeserializeOwned>(token: &str) -> Result<T, AppError> {
    let compressed = URL_SAFE_NO_PAD
        .decode(token.trim())
        .map_err(|e| AppError::token(format!("base64: {e}")))?;
    let mut json = Vec::new();
    DeflateDecoder::new(compressed.as_slice())
        .take(MAX_INFLATED_BYTES + 1)
        .read_to_end(&mut json)
        .map_err(|e| AppError::token(format!("inflate: {e}")))?;
    if json.len() as u64 > MAX_INFLATED_BYTES {
        return Err(AppError::token("payload too large"));
    }
    serde_json::from_slice(&json).map_err(|e| AppError::token(format!("json: {e}")))
}

/// Decode a session and check it is structurally sound.
pub fn decode_session(token: &str) -> Result<SessionState, AppError> {
    let state: SessionState = decode(token)?;
    state.validate()?;
    Ok(state)
}
