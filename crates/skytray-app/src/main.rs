//! Skytray binary: wires config, weather provider, renderer, and the
//! periodic tray refresh loop together.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;

use skytray_core::{Config, FileSettings};
use skytray_icon::IconRenderer;
use skytray_weather::{provider_for, WeatherService};

mod refresh;
mod tray;

use refresh::RefreshLoop;
use tray::FileTray;

#[tokio::main]
async fn main() -> Result<()> {
    skytray_core::init()?;

    let config = Config::load().context("failed to load configuration")?;
    let validation = config.validate();
    if !validation.is_valid() {
        anyhow::bail!("invalid configuration: {}", validation.error_summary());
    }
    for warning in &validation.warnings {
        tracing::warn!("Config warning: {warning}");
    }

    let settings = Arc::new(FileSettings::new()?);
    let provider = provider_for(config.weather.provider, &config.language)?;
    let service = WeatherService::new(provider, settings);

    let renderer = IconRenderer::new();
    if !renderer.has_scalable_font() {
        tracing::warn!("No scalable font available, using bitmap badge numerals");
    }

    let runtime_dir = dirs::cache_dir()
        .context("could not determine cache directory")?
        .join("skytray");
    let tray = FileTray::new(&runtime_dir);

    let minutes = config.weather.refresh_minutes.max(1);
    tracing::info!(
        "Skytray started (provider: {:?}, refresh every {minutes} min, icon at {})",
        config.weather.provider,
        tray.icon_path().display()
    );

    let refresh = RefreshLoop::new(
        service,
        renderer,
        Box::new(tray),
        Duration::from_secs(u64::from(minutes) * 60),
    );
    refresh.run().await
}
