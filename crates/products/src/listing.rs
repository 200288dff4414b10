//! Admin product form conveniences: slug, SKU and meta description defaults.

use deunicode::deunicode;
use heck::ToKebabCase;

use crate::product::{Product, parse_strength_mg};

/// Search-engine description length cap, in characters.
pub const META_DESCRIPTION_MAX_CHARS: usize = 160;

/// URL slug for a product name (`"Cool Mint!"` -> `"cool-mint"`).
///
/// Letters are transliterated to ASCII first (`"Øresund"` -> `"oresund"`), so
/// slugs are always URL-safe. Camel-cased names split into words
/// (`"CoolMint"` -> `"cool-mint"`).
pub fn generate_slug(name: &str) -> String {
    deunicode(name).to_kebab_case()
}

/// Default SKU: the first three alphanumerics of up to three name words, then
/// the strength in milligrams (`"Cool Mint"`, `16mg` -> `"COO-MIN-16"`).
pub fn generate_sku(name: &str, strength: Option<&str>) -> String {
    let mut parts: Vec<String> = deunicode(name)
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .take(3)
                .collect::<String>()
                .to_ascii_uppercase()
        })
        .filter(|part| !part.is_empty())
        .take(3)
        .collect();

    if parts.is_empty() {
        parts.push("SKU".to_string());
    }
    if let Some(mg) = strength.and_then(parse_strength_mg) {
        parts.push(mg.to_string());
    }
    parts.join("-")
}

/// Meta description built from the listing fields, capped at
/// [`META_DESCRIPTION_MAX_CHARS`].
pub fn generate_meta_description(product: &Product) -> String {
    let mut text = format!("{} nicotine pouches", product.name);
    if let Some(flavor) = &product.flavor {
        text.push_str(&format!(" - {flavor} flavor"));
    }
    if let Some(strength) = &product.nicotine_strength {
        text.push_str(&format!(", {strength} strength"));
    }
    if let Some(description) = &product.description {
        text.push_str(". ");
        text.push_str(description.trim());
    }
    truncate_chars(&text, META_DESCRIPTION_MAX_CHARS)
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}
