use std::str::FromStr;

/// Which implementation of the roster API the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    #[default]
    Http,
    /// In-memory roster seeded with the demo activities. No server needed.
    Local,
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "http" | "" => Ok(Backend::Http),
            "local" | "memory" => Ok(Backend::Local),
            other => Err(format!("unknown roster backend: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Prefix for every API path. Empty means same origin as the page.
    pub api_base_url: String,
    pub backend: Backend,
}

impl Config {
    pub fn new() -> Self {
        Self::from_values(env!("ROSTER_API_URL"), env!("ROSTER_BACKEND"))
    }

    fn from_values(api_base_url: &str, backend: &str) -> Self {
        let backend = backend.parse().unwrap_or_else(|err: String| {
            log::warn!("{err}, falling back to http");
            Backend::Http
        });
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            backend,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
