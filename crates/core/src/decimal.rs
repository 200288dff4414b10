//! Lenient numeric parsing for values the storefront API sends as text.
//!
//! Prices come out of decimal columns as strings (`"15.00"`) and strengths as
//! labels (`"16mg"`). Both are read the way a browser would read them: the
//! numeric prefix counts and the rest is ignored.

use serde::{Deserialize, Deserializer};

/// Leading integer of `raw` (`"16mg"` -> `16`).
///
/// Leading whitespace and a sign are accepted. `None` when no digits lead.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, rest) = split_sign(s);
    let digits = leading_digits(rest);
    if digits.is_empty() {
        return None;
    }
    let magnitude: i64 = digits.parse().ok()?;
    Some(if sign == "-" { -magnitude } else { magnitude })
}

/// Longest decimal prefix of `raw` (`"9.99 USD"` -> `9.99`); `NaN` when there is none.
pub fn parse_decimal(raw: &str) -> f64 {
    let s = raw.trim_start();
    let (sign, rest) = split_sign(s);

    let int_part = leading_digits(rest);
    let mut consumed = int_part.len();
    let mut frac_part = "";
    if rest[consumed..].starts_with('.') {
        frac_part = leading_digits(&rest[consumed + 1..]);
        consumed += 1 + frac_part.len();
    }
    if int_part.is_empty() && frac_part.is_empty() {
        return f64::NAN;
    }

    let mut exponent = String::new();
    let tail = &rest[consumed..];
    if let Some(exp) = tail.strip_prefix(|c: char| c == 'e' || c == 'E') {
        let (exp_sign, exp_rest) = split_sign(exp);
        let exp_digits = leading_digits(exp_rest);
        if !exp_digits.is_empty() {
            exponent = format!("e{exp_sign}{exp_digits}");
        }
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let frac_part = if frac_part.is_empty() { "0" } else { frac_part };
    format!("{sign}{int_part}.{frac_part}{exponent}")
        .parse()
        .unwrap_or(f64::NAN)
}

fn split_sign(s: &str) -> (&str, &str) {
    match s.as_bytes().first() {
        Some(b'-') | Some(b'+') => s.split_at(1),
        _ => ("", s),
    }
}

fn leading_digits(s: &str) -> &str {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    &s[..end]
}

/// Deserialize a decimal that may arrive as a JSON string or a bare number,
/// keeping it as text.
pub fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
