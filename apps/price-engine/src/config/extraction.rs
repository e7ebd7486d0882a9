//! Price extraction configuration.

use serde::{Deserialize, Serialize};

use crate::domain::price_extraction::{LocaleHint, ResolverOptions};

/// Extraction settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Separator convention: `US`, `EU`, or `AUTO`.
    #[serde(default)]
    pub locale_hint: LocaleHint,
    /// ISO 3166-1 alpha-2 country of the scraping proxy.
    #[serde(default)]
    pub proxy_country: Option<String>,
}

impl ExtractionConfig {
    /// Resolver options for these settings.
    #[must_use]
    pub fn resolver_options(&self) -> ResolverOptions {
        ResolverOptions {
            locale_hint: self.locale_hint,
            proxy_country: self
                .proxy_country
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_uppercase),
        }
    }
}
