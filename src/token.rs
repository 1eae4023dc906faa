use base64::{prelude::BASE64_URL_SAFE_NO_PAD, Engine};

use crate::random::{OsRandom, RandomSourceError, SecureRandom};

pub(crate) const TOKEN_BYTE_LENGTH: usize = 48;
// 48 is a multiple of 3 so the unpadded encoding never needs padding anyway
pub(crate) const TOKEN_ENCODED_LENGTH: usize = TOKEN_BYTE_LENGTH / 3 * 4;

/// Generates a URL-safe token from 48 bytes of operating system entropy.
///
/// The token is 64 characters from `[A-Za-z0-9_-]` with no padding.
pub(crate) fn generate_token() -> Result<String, RandomSourceError> {
    generate_token_with(&mut OsRandom)
}

pub(crate) fn generate_token_with(
    source: &mut impl SecureRandom,
) -> Result<String, RandomSourceError> {
    let mut bytes = [0u8; TOKEN_BYTE_LENGTH];
    source.fill(&mut bytes)?;

    // Catches sources that are a no-op or otherwise trivially broken
    let first = bytes[0];
    if bytes.iter().all(|byte| *byte == first) {
        return Err(RandomSourceError::Degenerate);
    }

    let token = BASE64_URL_SAFE_NO_PAD.encode(bytes);
    tracing::debug!("Generated token with {} characters", token.len());
    debug_assert_eq!(token.len(), TOKEN_ENCODED_LENGTH);

    Ok(token)
}
