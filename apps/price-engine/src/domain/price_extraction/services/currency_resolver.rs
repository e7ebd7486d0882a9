//! Currency Resolver
//!
//! Symbol or explicit code, plus the proxy country, to an ISO 4217 code.
//! Resolution is total: anything unrecognized is `USD`.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::shared::CurrencyCode;

/// Codes accepted when they appear verbatim in the text.
const KNOWN_CODES: [&str; 21] = [
    "USD", "EUR", "GBP", "JPY", "CAD", "AUD", "CHF", "CNY", "INR", "SGD", "MXN", "NZD", "HKD",
    "NOK", "DKK", "SEK", "BRL", "RUB", "KRW", "THB", "PLN",
];

/// Symbols and their default codes. Multi-character symbols come before the
/// single characters they contain.
const SYMBOLS: [(&str, &str); 17] = [
    ("US$", "USD"),
    ("NZ$", "NZD"),
    ("HK$", "HKD"),
    ("R$", "BRL"),
    ("C$", "CAD"),
    ("A$", "AUD"),
    ("S$", "SGD"),
    ("CHF", "CHF"),
    ("kr", "SEK"),
    ("€", "EUR"),
    ("£", "GBP"),
    ("¥", "JPY"),
    ("₹", "INR"),
    ("₽", "RUB"),
    ("₩", "KRW"),
    ("฿", "THB"),
    ("$", "USD"),
];

/// `(symbol, country, code)` reinterpretations of ambiguous symbols.
const GEO_OVERRIDES: [(&str, &str, &str); 9] = [
    ("$", "CA", "CAD"),
    ("$", "AU", "AUD"),
    ("$", "SG", "SGD"),
    ("$", "MX", "MXN"),
    ("$", "NZ", "NZD"),
    ("$", "HK", "HKD"),
    ("kr", "NO", "NOK"),
    ("kr", "DK", "DKK"),
    ("¥", "CN", "CNY"),
];

#[allow(clippy::expect_used)] // Regex is compile-time constant
fn iso_token() -> &'static Regex {
    static ISO_TOKEN: OnceLock<Regex> = OnceLock::new();
    ISO_TOKEN.get_or_init(|| Regex::new(r"\b([A-Z]{3})\b").expect("iso token regex is valid"))
}

fn code(value: &str) -> CurrencyCode {
    CurrencyCode::parse(value).unwrap_or_default()
}

/// Resolve the currency of a price snippet.
///
/// Only the first standalone three-letter uppercase token is considered as
/// an explicit code; it wins if it is a known code. Otherwise the first
/// matching symbol decides, with `proxy_country` (ISO 3166-1 alpha-2, any
/// case) reinterpreting `$`, `kr`, and `¥`.
#[must_use]
pub fn resolve_currency(text: &str, proxy_country: Option<&str>) -> CurrencyCode {
    if let Some(token) = iso_token().captures(text).and_then(|caps| caps.get(1)) {
        if KNOWN_CODES.contains(&token.as_str()) {
            return code(token.as_str());
        }
    }

    let country = proxy_country
        .map(|c| c.trim().to_uppercase())
        .filter(|c| !c.is_empty());

    let Some(&(symbol, default_code)) = SYMBOLS.iter().find(|(symbol, _)| text.contains(symbol))
    else {
        return CurrencyCode::USD;
    };

    let resolved = country
        .as_deref()
        .and_then(|country| {
            GEO_OVERRIDES
                .iter()
                .find(|(s, c, _)| *s == symbol && *c == country)
                .map(|(_, _, code)| *code)
        })
        .unwrap_or(default_code);

    code(resolved)
}

/// Resolve an explicit currency field from a structured candidate.
///
/// Any three-letter code is taken as-is (uppercased), even if it is not in
/// the known list; other text falls back to [`resolve_currency`]. A missing
/// or blank field is `USD`.
#[must_use]
pub fn resolve_explicit_currency(field: Option<&str>, proxy_country: Option<&str>) -> CurrencyCode {
    match field.map(str::trim) {
        None | Some("") => CurrencyCode::USD,
        Some(value) => {
            CurrencyCode::parse(value).unwrap_or_else(|_| resolve_currency(value, proxy_country))
        }
    }
}
