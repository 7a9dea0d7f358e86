//! Auth Client
//!
//! Login/signup calls plus identity resolution for a bearer token.

use gloo_net::http::Request;
use web_sys::AbortSignal;

use super::{bearer, check, parse_json, ApiError};
use crate::models::{Claims, Credentials, TokenResponse, UserIdentity};
use crate::token;

/// Credential plus the identity it resolves to
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub token: String,
    pub user: UserIdentity,
}

/// Client for the unauthenticated auth endpoints
#[derive(Debug, Clone)]
pub struct AuthClient {
    base: String,
}

impl AuthClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Submit credentials; on success the returned token has already been
    /// resolved to a user identity. The caller persists the token.
    pub async fn login(
        &self,
        credentials: &Credentials,
        signal: Option<&AbortSignal>,
    ) -> Result<AuthSession, ApiError> {
        self.authenticate("login", credentials, signal).await
    }

    /// Same contract as [`login`](Self::login), for account creation
    pub async fn signup(
        &self,
        credentials: &Credentials,
        signal: Option<&AbortSignal>,
    ) -> Result<AuthSession, ApiError> {
        self.authenticate("signup", credentials, signal).await
    }

    async fn authenticate(
        &self,
        endpoint: &str,
        credentials: &Credentials,
        signal: Option<&AbortSignal>,
    ) -> Result<AuthSession, ApiError> {
        let resp = Request::post(&format!("{}/auth/{endpoint}", self.base))
            .abort_signal(signal)
            .json(credentials)
            .map_err(|_| ApiError::Network)?
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        let body: TokenResponse = parse_json(check(resp).await?).await?;

        let user = self.resolve_identity(&body.access_token, signal).await?;
        Ok(AuthSession {
            token: body.access_token,
            user,
        })
    }

    /// Resolve the identity behind a token.
    ///
    /// Asks the whoami endpoint; backends without one (404) fall back to
    /// decoding the token's payload segment locally. A decode failure means
    /// the session must be cleared and the user treated as logged out.
    pub async fn resolve_identity(
        &self,
        token: &str,
        signal: Option<&AbortSignal>,
    ) -> Result<UserIdentity, ApiError> {
        let resp = Request::get(&format!("{}/auth/me", self.base))
            .header("Authorization", &bearer(token))
            .abort_signal(signal)
            .send()
            .await
            .map_err(|_| ApiError::Network)?;

        if resp.status() == 404 {
            return identity_from_claims(token::decode(token)?);
        }
        parse_json(check(resp).await?).await
    }
}

/// Build an identity from locally decoded claims
pub fn identity_from_claims(claims: Claims) -> Result<UserIdentity, ApiError> {
    let id = claims
        .sub
        .parse::<u32>()
        .map_err(|_| ApiError::Decode("Token subject is not a user id".into()))?;
    Ok(UserIdentity {
        id,
        email: claims.email.or(claims.name).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_resolve_to_matching_identity() {
        let claims = Claims {
            sub: "42".into(),
            email: Some("a@b.com".into()),
            name: None,
            exp: None,
        };
        let user = identity_from_claims(claims).unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(user.email, "a@b.com");
    }

    #[test]
    fn name_claim_stands_in_for_missing_email() {
        let claims = Claims {
            sub: "7".into(),
            email: None,
            name: Some("Ada".into()),
            exp: None,
        };
        assert_eq!(identity_from_claims(claims).unwrap().email, "Ada");
    }

    #[test]
    fn non_numeric_subject_is_a_decode_error() {
        let claims = Claims {
            sub: "not-a-number".into(),
            email: None,
            name: None,
            exp: None,
        };
        assert!(matches!(
            identity_from_claims(claims),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn decoded_token_identity_matches_embedded_subject() {
        use base64::engine::general_purpose::URL_SAFE_NO_PAD;
        use base64::Engine as _;

        let token = format!(
            "h.{}.s",
            URL_SAFE_NO_PAD.encode(r#"{"sub":"9","email":"x@y.z"}"#)
        );
        let user = identity_from_claims(crate::token::decode(&token).unwrap()).unwrap();
        assert_eq!(user.id, 9);
    }
}
