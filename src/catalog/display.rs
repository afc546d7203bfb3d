//! Presentation helpers for normalized results.

use crate::catalog::domain::NormalizedResult;

/// Subtitle used when a result has no artist
const UNKNOWN_ARTIST: &str = "Unknown";

/// Price as shown on the buy button: "Free" for zero, else currency formatted
pub fn price_text(result: &NormalizedResult) -> String {
    if result.price == 0.0 {
        return "Free".to_string();
    }
    format_currency(result.price, &result.currency)
}

/// "Artist (Type)", or "Unknown" when the artist is missing
pub fn subtitle(result: &NormalizedResult) -> String {
    if result.artist.is_empty() {
        UNKNOWN_ARTIST.to_string()
    } else {
        format!("{} ({})", result.artist, result.type_label)
    }
}

/// One-line debug description
pub fn description(result: &NormalizedResult) -> String {
    let kind = if result.kind.is_empty() { "None" } else { result.kind.as_str() };
    let artist = if result.artist.is_empty() { "None" } else { result.artist.as_str() };
    format!(
        "Result - Kind: {}, Name: {}, Artist Name: {}",
        kind, result.display_name, artist
    )
}

/// Format an amount in the given ISO 4217 currency
pub fn format_currency(amount: f64, code: &str) -> String {
    let code = code.trim().to_ascii_uppercase();
    let decimals = match code.as_str() {
        "JPY" | "KRW" | "VND" | "CLP" | "ISK" => 0,
        _ => 2,
    };
    let number = format!("{:.*}", decimals, amount);

    match currency_symbol(&code) {
        Some(symbol) => format!("{}{}", symbol, number),
        None if code.is_empty() => number,
        None => format!("{} {}", code, number),
    }
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    let symbol = match code {
        "USD" => "$",
        "CAD" => "CA$",
        "AUD" => "A$",
        "NZD" => "NZ$",
        "MXN" => "MX$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "CNY" => "CN¥",
        "INR" => "₹",
        "KRW" => "₩",
        "BRL" => "R$",
        _ => return None,
    };
    Some(symbol)
}
