/// Explicit runtime configuration, provided through context at startup
/// instead of read from globals at call sites.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub parser_url: String,
}

impl AppConfig {
    /// Resolve the parser endpoint. An explicit `PARSER_URL` at build
    /// time wins; otherwise the backend relay on the current origin.
    /// Debug builds run on the dioxus dev server, so they talk to the
    /// backend port directly.
    pub fn resolve() -> Self {
        if let Some(url) = option_env!("PARSER_URL") {
            return AppConfig {
                parser_url: url.to_string(),
            };
        }
        if cfg!(debug_assertions) {
            return AppConfig {
                parser_url: endpoint_on("http://localhost:3000"),
            };
        }
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        AppConfig {
            parser_url: endpoint_on(&origin),
        }
    }
}

fn endpoint_on(origin: &str) -> String {
    format!("{origin}/api/parse")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_on_origin() {
        assert_eq!(
            endpoint_on("http://localhost:3000"),
            "http://localhost:3000/api/parse"
        );
    }

    #[test]
    fn test_endpoint_on_production_origin() {
        assert_eq!(
            endpoint_on("https://viewer.example.com"),
            "https://viewer.example.com/api/parse"
        );
    }
}
