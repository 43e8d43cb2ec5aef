use crate::consts::cli_consts::DEFAULT_API_URL;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// The API gateway the console talks to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Gateway running on this machine.
    #[default]
    Local,
    /// Any other gateway, addressed by base URL.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the base URL of the API gateway, without a trailing slash.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => DEFAULT_API_URL.to_string(),
            Environment::Custom { api_url } => api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolves the environment from an explicit flag, falling back to the
    /// `FORECAST_API_URL` variable and then to the local gateway.
    pub fn resolve(flag: Option<&str>, env_var: Option<&str>) -> Self {
        flag.or(env_var)
            .and_then(|s| s.parse::<Environment>().ok())
            .unwrap_or_default()
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(());
        }
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(Environment::Local);
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return Ok(Environment::Custom {
                api_url: trimmed.trim_end_matches('/').to_string(),
            });
        }
        Err(())
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_takes_precedence_over_env_var() {
        let env = Environment::resolve(Some("https://a.example"), Some("https://b.example"));
        assert_eq!(env.api_url(), "https://a.example");
    }

    #[test]
    fn test_falls_back_to_local() {
        assert_eq!(Environment::resolve(None, None), Environment::Local);
        assert_eq!(Environment::resolve(Some("garbage"), None), Environment::Local);
        assert_eq!(Environment::Local.api_url(), "http://localhost:8000");
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let env: Environment = "http://gateway:9000/".parse().unwrap();
        assert_eq!(env.api_url(), "http://gateway:9000");
        assert_eq!(
            format!("{:?}", env),
            "Environment::Custom, URL: http://gateway:9000"
        );
    }
}
