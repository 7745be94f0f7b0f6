/// Environment variable holding the local emulator URI.
pub const ENDPOINT_ENV: &str = "DYNAMODB_ENDPOINT";

/// Process settings resolved from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Endpoint override. `None` means the ambient AWS configuration is used.
    pub endpoint: Option<String>,
}

impl Settings {
    /// Loads `.env` (if present) and reads the settings from the process environment.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup(ENDPOINT_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        Self { endpoint }
    }
}
