use tracing::warn;

/// Runtime settings read from the environment at startup
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_address: String,
    /// Rating assigned to new users that do not supply one
    pub default_elo: i32,
    /// Analysis depth used when a request omits it
    pub engine_depth: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            default_elo: 1200,
            engine_depth: 15,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            bind_address: lookup("CHESSTRACK_ADDR").unwrap_or(defaults.bind_address),
            default_elo: parse_or(&lookup, "CHESSTRACK_DEFAULT_ELO", defaults.default_elo),
            engine_depth: parse_or(&lookup, "CHESSTRACK_ENGINE_DEPTH", defaults.engine_depth),
        }
    }
}

fn parse_or<T: std::str::FromStr + Copy + std::fmt::Display>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    match lookup(key) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, fallback = %default, "Ignoring unparsable setting");
            default
        }),
        None => default,
    }
}
