pub mod color;
pub mod variant;

use indexmap::IndexMap;

use crate::styling::css::{CssRule, escape_class_fragment};
use crate::theme::{PaletteEntry, StripeTheme};

pub use color::percent_to_hex;
pub use variant::Variant;

/// Tile size for the repeating stripe pattern: the diagonal of a 20px
/// square, so the bands read as square stripes.
pub const BACKGROUND_SIZE: &str = "28.28px 28.28px";

/// Assembles the diagonal two-tone gradient. The stop sequence yields two
/// bands per repeat unit, each spanning 25% of the tile.
///
/// Color strings are passed through untouched; malformed input produces a
/// malformed declaration for the consuming engine to reject.
pub fn stripe_gradient(base: &str, derived: &str) -> String {
    format!(
        "linear-gradient(135deg, {base} 25%, {derived} 25%, {derived} 50%, {base} 50%, {base} 75%, {derived} 75%, {derived} 100%)"
    )
}

/// One generated stripe utility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StripeUtility {
    class_name: String,
    background_image: String,
    background_size: String,
}

impl StripeUtility {
    pub fn new(name: &str, entry: &PaletteEntry) -> Self {
        let derived = entry.derived_color();
        Self {
            class_name: format!("gradient-stripes-{name}"),
            background_image: stripe_gradient(entry.base(), &derived),
            background_size: BACKGROUND_SIZE.to_string(),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn background_image(&self) -> &str {
        &self.background_image
    }

    pub fn background_size(&self) -> &str {
        &self.background_size
    }

    /// Base rule, e.g. `.gradient-stripes-blue-500`.
    pub fn rule(&self) -> CssRule {
        CssRule::for_class(&self.class_name)
            .declaration("background-image", &self.background_image)
            .declaration("background-size", &self.background_size)
    }

    /// Rule registered under a state variant, e.g.
    /// `.hover\:gradient-stripes-blue-500:hover`.
    pub fn variant_rule(&self, variant: Variant) -> CssRule {
        CssRule::new(&variant.selector(&self.class_name))
            .declaration("background-image", &self.background_image)
            .declaration("background-size", &self.background_size)
    }
}

/// Declaration pairs for a single palette value, for callers that register
/// a dynamic-value `stripe-[...]` utility instead of the static class set.
pub fn stripe_declarations(entry: &PaletteEntry) -> Vec<(String, String)> {
    let derived = entry.derived_color();
    vec![
        (
            "background-image".to_string(),
            stripe_gradient(entry.base(), &derived),
        ),
        ("background-size".to_string(), BACKGROUND_SIZE.to_string()),
    ]
}

/// Generates the utility set for a theme, keyed by escaped class name in
/// palette insertion order. Pure: calling twice with the same theme gives
/// deep-equal output.
pub fn stripe_utilities(theme: &StripeTheme) -> IndexMap<String, StripeUtility> {
    theme
        .stripes
        .iter()
        .map(|(name, entry)| {
            let utility = StripeUtility::new(name, entry);
            (escape_class_fragment(utility.class_name()), utility)
        })
        .collect()
}

/// Renders the full stripe stylesheet, each utility followed by its variant
/// rules.
pub fn render_stylesheet(theme: &StripeTheme) -> String {
    stripe_utilities(theme)
        .values()
        .flat_map(|utility| {
            let mut rules = vec![utility.rule()];
            rules.extend(theme.variants.iter().map(|v| utility.variant_rule(*v)));
            rules
        })
        .map(|rule| rule.render())
        .collect::<Vec<_>>()
        .join("\n")
}
