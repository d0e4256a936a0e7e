use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PARSER_URL: &str = "http://localhost:8000/parse";
pub const DEFAULT_DIST_DIR: &str = "dist";

/// Runtime configuration, read once at startup and passed down
/// explicitly instead of consulted from globals.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub parser_url: String,
    pub dist_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Separated so tests can
    /// exercise defaults and overrides without touching the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let parser_url =
            lookup("PARSER_URL").unwrap_or_else(|| DEFAULT_PARSER_URL.to_string());
        let dist_dir =
            PathBuf::from(lookup("DIST_DIR").unwrap_or_else(|| DEFAULT_DIST_DIR.to_string()));

        Config {
            port,
            parser_url,
            dist_dir,
        }
    }
}
