// src/utils/uid.rs

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::{rngs::OsRng, RngCore};

/// 生成される uid の文字数 (128 bit を base64 でパディングなしエンコード)
pub const UID_LENGTH: usize = 22;

/// Generate a random 22 character identifier.
///
/// 128 random bits, URL-safe base64 without padding, so the value carries no
/// personal data and can go straight into a cookie or a path segment.
pub fn generate_uid() -> String {
    let mut bytes = [0u8; 16];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
