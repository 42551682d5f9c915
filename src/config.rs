use crate::analysis::entry::PremiumBasis;
use crate::errors::{AnalyzerError, AnalyzerResult};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub premium_basis: PremiumBasis,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            premium_basis: PremiumBasis::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> AnalyzerResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> AnalyzerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_port = var_or(&lookup, "SERVER_PORT", "8080")
            .parse::<u16>()
            .map_err(|e| AnalyzerError::Config(format!("SERVER_PORT: {e}")))?;

        let premium_basis = var_or(&lookup, "PREMIUM_BASIS", "call_ask_put_bid")
            .parse::<PremiumBasis>()
            .map_err(|e| AnalyzerError::Config(format!("PREMIUM_BASIS: {e}")))?;

        Ok(Self {
            server_host: var_or(&lookup, "SERVER_HOST", "0.0.0.0"),
            server_port,
            premium_basis,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn var_or<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| default.to_string())
}
