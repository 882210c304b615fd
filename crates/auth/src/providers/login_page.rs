use async_trait::async_trait;
use oidc_gate_core::auth::{LoginPageProvider, Result};
use url::Url;

/// Login page known up front, typically from `OIDC_LOGIN_PAGE`.
#[derive(Debug, Clone)]
pub struct StaticLoginPage {
    url: Url,
}

impl StaticLoginPage {
    pub fn new(url: Url) -> Self {
        Self { url }
    }
}

#[async_trait]
impl LoginPageProvider for StaticLoginPage {
    async fn login_page(&self) -> Result<Url> {
        Ok(self.url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_url() {
        let provider = StaticLoginPage::new(Url::parse("https://idp.example/login").unwrap());
        let url = provider.login_page().await.unwrap();
        assert_eq!(url.as_str(), "https://idp.example/login");
    }
}
