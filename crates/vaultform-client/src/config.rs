use serde::Deserialize;

/// Vault connection configuration (parsed from TOML)
///
/// The application token can be kept out of the file and supplied through
/// `VAULTFORM_APP_TOKEN`; `VAULTFORM_SERVER_URL` overrides the file value
/// the same way.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the vault server (e.g. `https://vault.example.com`)
    #[serde(default)]
    pub server_url: String,

    /// Application token used as a bearer credential
    #[serde(default)]
    pub app_token: String,
}

impl ClientConfig {
    /// Build a configuration from explicit values
    pub fn new(server_url: impl Into<String>, app_token: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            app_token: app_token.into(),
        }
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config.with_env_overrides())
    }

    /// Build a configuration from environment variables alone
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Self::default().with_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("VAULTFORM_SERVER_URL") {
            self.server_url = url;
        }
        if let Ok(token) = std::env::var("VAULTFORM_APP_TOKEN") {
            self.app_token = token;
        }
        self
    }

    /// Check that the configuration is complete enough to build a client
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server_url.is_empty() {
            anyhow::bail!("server_url is required (or set VAULTFORM_SERVER_URL)");
        }
        if self.app_token.is_empty() {
            anyhow::bail!("app_token is required (or set VAULTFORM_APP_TOKEN)");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml() {
        let config: ClientConfig = toml::from_str(
            r#"
            server_url = "https://vault.example.com"
            app_token = "token-123"
            "#,
        )
        .unwrap();
        assert_eq!(config.server_url, "https://vault.example.com");
        assert_eq!(config.app_token, "token-123");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let config = ClientConfig::new("https://vault.example.com", "");
        assert!(config.validate().is_err());
    }
}
