//! Site metadata shown on the demo page.

use serde::Serialize;

/// Environment variable overriding [`SiteUrls::base`].
pub const APP_URL_VAR: &str = "APP_URL";

/// Used when `APP_URL` is unset or blank.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    pub name: String,
    pub author: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub url: SiteUrls,
    pub links: SiteLinks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteUrls {
    pub base: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteLinks {
    pub github: String,
}

impl SiteConfig {
    /// Read the base URL from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build with `lookup` standing in for the environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base = lookup(APP_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            name: "Floem Swatch".to_string(),
            author: "CyberDeco".to_string(),
            description: "A popover color picker button for Floem, with shared color state"
                .to_string(),
            keywords: [
                "Rust",
                "Floem",
                "GUI",
                "Color Picker",
                "Color",
                "Picker",
                "Popover",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            url: SiteUrls {
                base,
                author: "https://github.com/cyberdeco".to_string(),
            },
            links: SiteLinks {
                github: "https://github.com/cyberdeco/floem-swatch".to_string(),
            },
        }
    }

    /// Metadata as JSON, for logging at startup.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
