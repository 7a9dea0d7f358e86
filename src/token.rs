//! Bearer Token Decoding
//!
//! Pure fallible decoding of the token's payload segment (base64url JSON).
//! Kept free of network code so it can be unit-tested directly. Used as a
//! fallback identity source for backends without a whoami endpoint.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use thiserror::Error;

use crate::models::Claims;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("token has no payload segment")]
    MissingPayload,
    #[error("payload is not valid base64url")]
    Base64,
    #[error("payload is not valid claims JSON")]
    Json,
}

/// Decode the claims embedded in a JWT-shaped bearer token.
///
/// Never panics on malformed input; callers clear the session on `Err`.
pub fn decode(token: &str) -> Result<Claims, DecodeError> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|s| !s.is_empty())
        .ok_or(DecodeError::MissingPayload)?;
    // Issuers differ on padding; accept both.
    let payload = payload.trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| DecodeError::Base64)?;
    serde_json::from_slice(&bytes).map_err(|_| DecodeError::Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_payload(json: &str) -> String {
        format!("header.{}.sig", URL_SAFE_NO_PAD.encode(json))
    }

    #[test]
    fn decodes_valid_payload() {
        let token = encode_payload(r#"{"sub":"42","email":"a@b.com","exp":1900000000}"#);
        let claims = decode(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn tolerates_padded_base64() {
        let unpadded = URL_SAFE_NO_PAD.encode(r#"{"sub":"7"}"#);
        let padded = format!("h.{}==.s", unpadded);
        assert_eq!(decode(&padded).unwrap().sub, "7");
    }

    #[test]
    fn missing_payload_segment() {
        assert_eq!(decode("justoneword"), Err(DecodeError::MissingPayload));
        assert_eq!(decode(""), Err(DecodeError::MissingPayload));
        assert_eq!(decode("a."), Err(DecodeError::MissingPayload));
    }

    #[test]
    fn invalid_base64() {
        assert_eq!(decode("h.!!!not-base64!!!.s"), Err(DecodeError::Base64));
    }

    #[test]
    fn invalid_json_payload() {
        let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode("not json"));
        assert_eq!(decode(&token), Err(DecodeError::Json));
    }

    #[test]
    fn json_without_sub_is_rejected() {
        let token = encode_payload(r#"{"email":"a@b.com"}"#);
        assert_eq!(decode(&token), Err(DecodeError::Json));
    }
}
