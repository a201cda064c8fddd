use crate::styling::css::escape_class_fragment;
use serde::Deserialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use strum_macros::EnumIter;

/// State variant under which a generated utility is additionally registered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    Hover,
    Focus,
    Active,
    FocusWithin,
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Hover => write!(f, "hover"),
            Variant::Focus => write!(f, "focus"),
            Variant::Active => write!(f, "active"),
            Variant::FocusWithin => write!(f, "focus-within"),
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hover" => Ok(Variant::Hover),
            "focus" => Ok(Variant::Focus),
            "active" => Ok(Variant::Active),
            "focus-within" => Ok(Variant::FocusWithin),
            other => Err(format!("unknown variant: {other}")),
        }
    }
}

impl Variant {
    /// Selector for a utility registered under this variant, e.g.
    /// `.hover\:gradient-stripes-blue-500:hover`.
    pub fn selector(&self, class_name: &str) -> String {
        format!(
            ".{}:{self}",
            escape_class_fragment(&format!("{self}:{class_name}"))
        )
    }
}
