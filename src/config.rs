use std::time::Duration;

// Valores fixos usados pelo player do site
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SESSION_COOKIE: &str = "FILMIXNET=ah3mgjr8vgfe84u86vcvu5gcp9";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Opções de rede de um [`crate::StreamProvider`].
///
/// Não existe arquivo de configuração: o binário preenche estes campos a
/// partir das flags de linha de comando.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Timeout aplicado a cada requisição
    pub timeout: Duration,
    /// Valor enviado no header `Cookie` do POST de player-data
    pub session_cookie: String,
    pub user_agent: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session_cookie: DEFAULT_SESSION_COOKIE.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ProviderConfig {
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = cookie.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_ten_second_timeout() {
        let config = ProviderConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.session_cookie.starts_with("FILMIXNET="));
    }

    #[test]
    fn builders_override_fields() {
        let config = ProviderConfig::default()
            .with_timeout(3)
            .with_session_cookie("FILMIXNET=abc");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.session_cookie, "FILMIXNET=abc");
    }
}
