use std::fs;
use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::stripes::render_stylesheet;
use crate::theme::StripeTheme;

/// Writes the compiled stripe stylesheet under `<out_dir>/assets/css/`.
pub fn create_stripe_assets<P: AsRef<Path>>(theme: &StripeTheme, out_dir: P) -> Result<()> {
    let css_dir = out_dir.as_ref().join("assets/css");
    fs::create_dir_all(&css_dir)?;

    let path = css_dir.join("stripes.css");
    fs::write(&path, render_stylesheet(theme))?;

    info!(
        path = %path.display(),
        utilities = theme.stripes.len(),
        variants = theme.variants.len(),
        "wrote stripe stylesheet"
    );
    Ok(())
}
