pub use crate::assets::create_stripe_assets;
pub use crate::stripes::{
    BACKGROUND_SIZE, StripeUtility, Variant, render_stylesheet, stripe_declarations,
    stripe_gradient, stripe_utilities,
};
pub use crate::styling::css::{CssRule, escape_class_fragment};
pub use crate::theme::{Blend, PaletteEntry, StripeTheme, ThemeError};
