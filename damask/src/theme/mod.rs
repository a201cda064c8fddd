use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::stripes::Variant;
use crate::stripes::color::with_alpha;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Theme file not found: {0}")]
    NotFound(String),
    #[error("Palette entry '{name}' has malformed color '{color}' (expected #RRGGBB)")]
    MalformedColor { name: String, color: String },
    #[error("Palette mixes explicit-pair and intensity blend forms (first mismatch at '{name}')")]
    MixedBlendForms { name: String },
}

/// Second tone of a palette entry: either an explicit contrasting color
/// (legacy pair form) or an intensity from which a translucent overlay of
/// the base color is derived.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Blend {
    Intensity(f64),
    Color(String),
}

/// One named color configuration fed to the stripe generator, written in
/// theme files as a two-element array: `["#3b82f6", 85]` or
/// `["#3b82f6", "#1d4ed8"]`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "(String, Blend)")]
pub struct PaletteEntry {
    base: String,
    blend: Blend,
}

impl From<(String, Blend)> for PaletteEntry {
    fn from((base, blend): (String, Blend)) -> Self {
        Self { base, blend }
    }
}

impl PaletteEntry {
    pub fn new(base: impl Into<String>, blend: Blend) -> Self {
        Self {
            base: base.into(),
            blend,
        }
    }

    /// Canonical form: base color plus blend intensity.
    pub fn intensity(base: impl Into<String>, percent: f64) -> Self {
        Self::new(base, Blend::Intensity(percent))
    }

    /// Legacy form: explicit pair of base and contrasting color.
    pub fn pair(base: impl Into<String>, dark: impl Into<String>) -> Self {
        Self::new(base, Blend::Color(dark.into()))
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn blend(&self) -> &Blend {
        &self.blend
    }

    /// Second stripe tone: the explicit color for pair entries, or the base
    /// color with an alpha suffix for intensity entries.
    pub fn derived_color(&self) -> String {
        match &self.blend {
            Blend::Intensity(percent) => with_alpha(&self.base, *percent),
            Blend::Color(color) => color.clone(),
        }
    }
}

/// Theme configuration for the stripe generator.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StripeTheme {
    #[serde(default)]
    pub stripes: IndexMap<String, PaletteEntry>,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl StripeTheme {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::NotFound(path.display().to_string()));
        }
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ThemeError> {
        let theme: StripeTheme = toml::from_str(contents)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Rejects malformed palette shapes at load time. The generator itself
    /// stays fail-soft; strictness lives only at this boundary.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let mut pair_form: Option<bool> = None;

        for (name, entry) in &self.stripes {
            if !is_hex_color(entry.base()) {
                return Err(ThemeError::MalformedColor {
                    name: name.clone(),
                    color: entry.base().to_string(),
                });
            }

            let is_pair = match entry.blend() {
                Blend::Color(color) => {
                    if !is_hex_color(color) {
                        return Err(ThemeError::MalformedColor {
                            name: name.clone(),
                            color: color.clone(),
                        });
                    }
                    true
                }
                Blend::Intensity(_) => false,
            };

            match pair_form {
                None => pair_form = Some(is_pair),
                Some(first) if first != is_pair => {
                    return Err(ThemeError::MixedBlendForms { name: name.clone() });
                }
                Some(_) => {}
            }
        }

        Ok(())
    }

    /// Stock palette used by the story-site frontend, registered under
    /// hover alongside the base classes.
    pub fn default_palette() -> Self {
        let mut stripes = IndexMap::new();

        stripes.insert("blue-300".into(), PaletteEntry::intensity("#93c5fd", 85.0));
        stripes.insert("blue-400".into(), PaletteEntry::intensity("#60a5fa", 85.0));
        stripes.insert("blue-500".into(), PaletteEntry::intensity("#3b82f6", 85.0));

        stripes.insert("indigo-300".into(), PaletteEntry::intensity("#a5b4fc", 80.0));
        stripes.insert("indigo-400".into(), PaletteEntry::intensity("#818cf8", 80.0));
        stripes.insert("indigo-500".into(), PaletteEntry::intensity("#6366f1", 80.0));

        stripes.insert("orange-400".into(), PaletteEntry::intensity("#fb923c", 80.0));
        stripes.insert("orange-500".into(), PaletteEntry::intensity("#f97316", 80.0));

        stripes.insert("violet-400".into(), PaletteEntry::intensity("#a78bfa", 80.0));
        stripes.insert("violet-500".into(), PaletteEntry::intensity("#8b5cf6", 80.0));

        stripes.insert("yellow-400".into(), PaletteEntry::intensity("#fbbf24", 90.0));
        stripes.insert("yellow-500".into(), PaletteEntry::intensity("#f59e0b", 90.0));

        Self {
            stripes,
            variants: vec![Variant::Hover],
        }
    }
}

fn is_hex_color(color: &str) -> bool {
    let Some(digits) = color.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}
