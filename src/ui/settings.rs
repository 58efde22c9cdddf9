use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const MIN_UI_SCALE: f32 = 0.75;
pub const MAX_UI_SCALE: f32 = 2.0;

/// Player-tweakable presentation settings, persisted as JSON in the
/// platform config directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    pub ui_scale: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { ui_scale: 1.0 }
    }
}

impl UiSettings {
    /// Scale clamped to the supported range, shielding the renderer from a
    /// hand-edited settings file.
    pub fn clamped_scale(&self) -> f32 {
        self.ui_scale.clamp(MIN_UI_SCALE, MAX_UI_SCALE)
    }
}

fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("bar-and-car");
    fs::create_dir_all(&path).ok();
    path.push("ui_settings.json");
    path
}

pub fn load_settings() -> UiSettings {
    read_settings(&settings_path())
}

pub fn save_settings(settings: &UiSettings) {
    write_settings(&settings_path(), settings);
}

fn read_settings(path: &Path) -> UiSettings {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

fn write_settings(path: &Path, settings: &UiSettings) {
    if let Ok(json) = serde_json::to_string_pretty(settings) {
        let _ = fs::write(path, json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_path(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .subsec_nanos();
        std::env::temp_dir().join(format!("{}_{}.json", name, nanos))
    }

    #[test]
    fn settings_survive_a_round_trip() {
        let path = scratch_path("ui_settings_round_trip");
        write_settings(&path, &UiSettings { ui_scale: 1.4 });
        let loaded = read_settings(&path);
        assert_eq!(loaded.ui_scale, 1.4);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn unreadable_settings_fall_back_to_defaults() {
        let path = scratch_path("ui_settings_garbage");
        fs::write(&path, "not json at all").unwrap();
        let loaded = read_settings(&path);
        assert_eq!(loaded.ui_scale, UiSettings::default().ui_scale);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_settings_fall_back_to_defaults() {
        let loaded = read_settings(Path::new("/definitely/not/a/real/path.json"));
        assert_eq!(loaded.ui_scale, 1.0);
    }

    #[test]
    fn scale_is_clamped_to_the_supported_range() {
        assert_eq!(UiSettings { ui_scale: 9.0 }.clamped_scale(), MAX_UI_SCALE);
        assert_eq!(UiSettings { ui_scale: 0.1 }.clamped_scale(), MIN_UI_SCALE);
        assert_eq!(UiSettings { ui_scale: 1.25 }.clamped_scale(), 1.25);
    }
}
