//! Periodic acquire → render → publish loop.
//!
//! One tick is one atomic unit from the tray's perspective. Ticks are
//! serialized by the single loop task; a slow cycle makes the interval
//! skip rather than stack. Errors are logged and the previous tray state
//! stays up.

use std::time::Duration;
use tokio::time::MissedTickBehavior;

use skytray_icon::IconRenderer;
use skytray_weather::WeatherService;

use crate::tray::{tray_label, TrayPublisher};

pub struct RefreshLoop {
    service: WeatherService,
    renderer: IconRenderer,
    tray: Box<dyn TrayPublisher>,
    interval: Duration,
}

impl RefreshLoop {
    pub fn new(
        service: WeatherService,
        renderer: IconRenderer,
        tray: Box<dyn TrayPublisher>,
        interval: Duration,
    ) -> Self {
        Self {
            service,
            renderer,
            tray,
            interval,
        }
    }

    /// Run forever. The first tick fires immediately so the tray shows
    /// weather right after startup.
    pub async fn run(&self) -> anyhow::Result<()> {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            self.refresh_once().await;
        }
    }

    /// One refresh cycle; failure leaves the last published state in place.
    pub async fn refresh_once(&self) {
        if let Err(err) = self.try_refresh().await {
            tracing::warn!("Tray refresh skipped: {err:#}");
        }
    }

    async fn try_refresh(&self) -> anyhow::Result<()> {
        let snapshot = self.service.get_weather("").await?;
        tracing::debug!(
            "Weather: {} {:.1}\u{b0}C {}",
            snapshot.location,
            snapshot.temperature,
            snapshot.condition
        );

        let icon = self.renderer.render_badge(&snapshot)?;
        self.tray.publish(&icon, &tray_label(&snapshot))?;
        Ok(())
    }
}
