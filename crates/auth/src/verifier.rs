//! ID token validation.
//!
//! This is where an invalid code is detected: any token the provider hands
//! back that fails signature or claim checks becomes `InvalidCode`.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use oidc_gate_core::auth::{AuthError, InvalidCodeError, OidcClaims, Result};
use serde::Deserialize;

use crate::config::AuthConfig;

#[derive(Debug, Deserialize)]
struct IdTokenClaims {
    sub: String,
    email: Option<String>,
    name: Option<String>,
}

/// Verifies HS256-signed ID tokens against the configured issuer and client.
pub struct IdTokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl IdTokenVerifier {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway.as_secs();
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.client_id.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        Self {
            key: DecodingKey::from_secret(&config.jwt_secret),
            validation,
        }
    }

    /// Validate `id_token` and extract its claims.
    ///
    /// # Errors
    ///
    /// - `InvalidCode` for a bad signature, an expired token, a wrong issuer or
    ///   audience, or anything that is not a JWT
    /// - `MissingClaim("sub")` when the subject is present but empty
    pub fn verify(&self, id_token: &str) -> Result<OidcClaims> {
        let token = decode::<IdTokenClaims>(id_token, &self.key, &self.validation).map_err(|e| {
            tracing::warn!(error = %e, "ID token failed validation");
            InvalidCodeError::new()
        })?;

        let claims = token.claims;
        if claims.sub.is_empty() {
            return Err(AuthError::MissingClaim("sub".to_string()));
        }

        Ok(OidcClaims {
            subject: claims.sub,
            email: claims.email,
            name: claims.name,
        })
    }
}
