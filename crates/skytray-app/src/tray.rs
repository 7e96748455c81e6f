//! Tray-publish seam.
//!
//! The real OS tray lives outside this crate; the app only hands over PNG
//! bytes and a text label. `FileTray` is the shipped implementation: it
//! persists the badge artifact and logs the label, which is enough for an
//! external tray host to pick up.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use skytray_weather::WeatherSnapshot;

/// Consumer of rendered tray badges.
pub trait TrayPublisher: Send + Sync {
    fn publish(&self, icon_png: &[u8], label: &str) -> Result<()>;
}

/// Publishes the badge by writing it to a runtime directory.
pub struct FileTray {
    icon_path: PathBuf,
}

impl FileTray {
    pub fn new(dir: &Path) -> Self {
        Self {
            icon_path: dir.join("tray-icon.png"),
        }
    }

    pub fn icon_path(&self) -> &Path {
        &self.icon_path
    }
}

impl TrayPublisher for FileTray {
    fn publish(&self, icon_png: &[u8], label: &str) -> Result<()> {
        if let Some(parent) = self.icon_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(&self.icon_path, icon_png)
            .with_context(|| format!("failed to write {}", self.icon_path.display()))?;

        tracing::info!("Tray updated: {label} ({} byte icon)", icon_png.len());
        Ok(())
    }
}

/// Tray tooltip text, e.g. `"Paris: 21°C - Clear Sky"`.
pub fn tray_label(snapshot: &WeatherSnapshot) -> String {
    format!(
        "{}: {:.0}°C - {}",
        snapshot.location, snapshot.temperature, snapshot.condition
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use skytray_weather::Condition;

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            location: "Paris".to_string(),
            temperature: 21.4,
            feels_like: 20.0,
            condition: Condition::ClearSky,
            description: "Clear Sky in Paris".to_string(),
            humidity: 40,
            wind_speed: 9.0,
            icon: "100".to_string(),
            last_updated: "2026-08-28 12:00:00".to_string(),
            forecast: vec![],
        }
    }

    #[test]
    fn test_tray_label_format() {
        assert_eq!(tray_label(&snapshot()), "Paris: 21°C - Clear Sky");
    }

    #[test]
    fn test_file_tray_writes_icon() {
        let dir = tempfile::tempdir().unwrap();
        let tray = FileTray::new(dir.path());

        tray.publish(b"\x89PNG fake bytes", "Paris: 21\u{b0}C - Clear Sky")
            .unwrap();

        let written = std::fs::read(tray.icon_path()).unwrap();
        assert_eq!(written, b"\x89PNG fake bytes");
    }
}
