//! Color-variant grouping over product display names.
//!
//! WooCommerce stores often publish one product per color with the color
//! encoded in the display name (`"Widget - Blue"`). This module groups such
//! records into families sharing a base name, using a fixed vocabulary of
//! color tokens: separators are tried first, then a bare word match.
//!
//! This is a string heuristic, not a parser. A product literally named
//! `"Red Rocket"` comes out as color `Red`, base `Rocket` via the word-match
//! fallback; that ambiguity is a long-standing property of the storefront
//! and is deliberately kept.

use std::collections::HashMap;

use golden_fig_core::Product;

/// Color names recognized in product display names.
pub const COLOR_VOCABULARY: &[&str] = &[
    "Black", "White", "Gray", "Grey", "Red", "Orange", "Yellow", "Green", "Blue", "Navy", "Teal",
    "Purple", "Pink", "Brown", "Beige", "Tan", "Cream", "Ivory", "Gold", "Silver", "Charcoal",
    "Burgundy", "Maroon", "Olive", "Turquoise",
];

/// Color assigned to products whose name encodes no recognized color.
pub const DEFAULT_COLOR: &str = "Default";

/// Separators between a base name and a trailing color token.
const SEPARATORS: &[&str] = &[" - ", " / ", " | ", " \u{2013} ", " \u{2014} "];

/// One product resolved to a color within a family.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorVariant {
    /// Resolved color, or [`DEFAULT_COLOR`] for colorless products.
    pub color: String,
    /// Images whose URL mentions the color token, falling back to the
    /// product's first image when none are tagged.
    pub images: Vec<String>,
    /// The underlying catalog record.
    pub product: Product,
}

/// Products sharing a base name, one per color.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFamily {
    pub base_name: String,
    /// Distinct colors in the order encountered.
    pub colors: Vec<String>,
    pub variants: Vec<ColorVariant>,
}

impl ProductFamily {
    /// The variant shown before the shopper picks a color: the first one
    /// encountered in input order.
    #[must_use]
    pub fn default_variant(&self) -> Option<&ColorVariant> {
        self.variants.first()
    }
}

/// Group a flat product list into color-variant families.
///
/// Families appear in the order their first variant appears in the input;
/// variants and colors within a family likewise keep input order.
#[must_use]
pub fn group_color_variants(products: &[Product]) -> Vec<ProductFamily> {
    let mut families: Vec<ProductFamily> = Vec::new();
    let mut index_by_base: HashMap<String, usize> = HashMap::new();

    for product in products {
        let (base_name, color) = match extract_color(&product.name) {
            Some((base, color)) => (base, color.to_owned()),
            None => (product.name.clone(), DEFAULT_COLOR.to_owned()),
        };

        let variant = ColorVariant {
            images: variant_images(product, &color),
            color: color.clone(),
            product: product.clone(),
        };

        if let Some(&at) = index_by_base.get(&base_name) {
            if let Some(family) = families.get_mut(at) {
                if !family.colors.contains(&color) {
                    family.colors.push(color);
                }
                family.variants.push(variant);
            }
        } else {
            index_by_base.insert(base_name.clone(), families.len());
            families.push(ProductFamily {
                base_name,
                colors: vec![color],
                variants: vec![variant],
            });
        }
    }

    families
}

/// Try to pull a color token out of a display name.
///
/// Returns `(base_name, canonical_color)`, or `None` for colorless names.
/// Separator splits are tried first; a bare word match is the fallback, and
/// it is what makes `"Red Rocket"` parse as color `Red`.
fn extract_color(name: &str) -> Option<(String, &'static str)> {
    // Separator split: the token after the last separator must be a color.
    for separator in SEPARATORS {
        if let Some((base, tail)) = name.rsplit_once(separator) {
            if let Some(color) = vocabulary_color(tail.trim()) {
                let base = base.trim();
                if !base.is_empty() {
                    return Some((base.to_owned(), color));
                }
            }
        }
    }

    // Trailing parenthetical: "Widget (Blue)".
    if let Some(stripped) = name.strip_suffix(')') {
        if let Some((base, inner)) = stripped.rsplit_once('(') {
            if let Some(color) = vocabulary_color(inner.trim()) {
                let base = base.trim();
                if !base.is_empty() {
                    return Some((base.to_owned(), color));
                }
            }
        }
    }

    // Word match: first word that is a known color, stripped from the name.
    let words: Vec<&str> = name.split_whitespace().collect();
    for (at, word) in words.iter().enumerate() {
        if let Some(color) = vocabulary_color(word) {
            let base = words
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != at)
                .map(|(_, w)| *w)
                .collect::<Vec<_>>()
                .join(" ");
            if base.is_empty() {
                return None;
            }
            return Some((base, color));
        }
    }

    None
}

/// Canonical vocabulary entry for a token, matched case-insensitively.
fn vocabulary_color(token: &str) -> Option<&'static str> {
    COLOR_VOCABULARY
        .iter()
        .find(|color| color.eq_ignore_ascii_case(token))
        .copied()
}

/// Images whose URL mentions the color token; first image as fallback.
fn variant_images(product: &Product, color: &str) -> Vec<String> {
    let token = color.to_ascii_lowercase();
    let tagged: Vec<String> = product
        .images
        .iter()
        .filter(|url| url.to_ascii_lowercase().contains(&token))
        .cloned()
        .collect();

    if tagged.is_empty() {
        product.images.first().cloned().into_iter().collect()
    } else {
        tagged
    }
}
