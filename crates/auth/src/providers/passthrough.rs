use async_trait::async_trait;
use oidc_gate_core::auth::{AuthError, CodeExchanger, Result};

/// Exchanger for providers using `response_mode=form_post` with an ID token
/// in place of the code: the "code" already is the token.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughExchanger;

#[async_trait]
impl CodeExchanger for PassthroughExchanger {
    async fn exchange_code(&self, code: &str) -> Result<String> {
        if code.is_empty() {
            return Err(AuthError::CodeExchange("empty authorization code".to_string()));
        }
        Ok(code.to_string())
    }
}
