//! Display formatting helpers.

/// Placeholder for a missing numeric or code field.
pub const NOT_AVAILABLE: &str = "N/A";
/// Placeholder for a missing capital city.
pub const CAPITAL_UNAVAILABLE: &str = "No disponible";

const ELLIPSIS: &str = "...";

/// Cuts `text` to at most `max_chars` characters, appending an ellipsis
/// only when something was removed.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{ELLIPSIS}", text[..byte_idx].trim_end()),
        None => text.to_string(),
    }
}

/// Groups digits in thousands with `.` (es-CO).
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Formats a possibly fractional quantity: grouped integer part, up to two
/// decimals after a `,`, trailing zeros dropped.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_decimal(value: f64) -> String {
    let value = value.abs();
    let cents = (value * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    match cents % 100 {
        0 => whole,
        frac if frac % 10 == 0 => format!("{whole},{}", frac / 10),
        frac => format!("{whole},{frac:02}"),
    }
}

/// Population-style count or the placeholder.
#[must_use]
pub fn count_or_na(value: Option<u64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), group_thousands)
}

/// Surface in km² or the placeholder.
#[must_use]
pub fn surface_or_na(value: Option<f64>) -> String {
    match value {
        Some(v) if v > 0.0 => format!("{} km²", format_decimal(v)),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Text value or the given placeholder.
#[must_use]
pub fn text_or(value: Option<&str>, placeholder: &str) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(placeholder)
        .to_string()
}
