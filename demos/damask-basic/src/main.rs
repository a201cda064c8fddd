use anyhow::Result;
use axum::{Router, response::Html, routing::get};
use damask::prelude::*;
use std::net::SocketAddr;
use tower_http::services::ServeDir;
use tracing::info;

fn sample_page(theme: &StripeTheme) -> String {
    let swatches = theme
        .stripes
        .keys()
        .map(|name| {
            format!(
                r#"<div class="swatch gradient-stripes-{name} hover:gradient-stripes-{name}">{name}</div>"#
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Damask</title>
    <link rel="stylesheet" href="/assets/css/stripes.css">
    <style>
        body {{ font-family: sans-serif; display: flex; flex-wrap: wrap; }}
        .swatch {{ width: 240px; height: 64px; margin: 8px; padding: 4px; color: #fff; }}
    </style>
</head>
<body>
        {swatches}
</body>
</html>
"#
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let theme = match StripeTheme::from_file("stripes.toml") {
        Ok(theme) => theme,
        Err(ThemeError::NotFound(path)) => {
            info!("no theme at {path}, using the stock palette");
            StripeTheme::default_palette()
        }
        Err(err) => return Err(err.into()),
    };

    create_stripe_assets(&theme, "dist")?;

    let index = sample_page(&theme);

    let app = Router::new()
        .nest_service("/assets", ServeDir::new("dist/assets"))
        .route("/", get(Html(index)));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("stripe demo running on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
