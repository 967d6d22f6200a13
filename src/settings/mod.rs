//! User settings: the only state Sproutvale writes to disk.
//!
//! Native builds keep `settings.json` next to the executable (written to a
//! temp file, then renamed). Browser builds use localStorage.

use bevy::prelude::*;
#[cfg(not(target_arch = "wasm32"))]
use std::fs;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use crate::shared::*;

pub const SETTINGS_FILE: &str = "settings.json";
#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "sproutvale.settings";

/// Step applied by the pause-menu volume keys.
pub const VOLUME_STEP: f32 = 0.05;

pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_settings)
            .add_systems(
                Update,
                adjust_music_from_pause_menu.run_if(in_state(GameState::Paused)),
            )
            .add_systems(
                Update,
                (apply_volume_changes, persist_settings_on_change).chain(),
            );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SERIALIZATION
// ═══════════════════════════════════════════════════════════════════════

pub fn settings_to_json(settings: &UserSettings) -> Result<String, String> {
    serde_json::to_string_pretty(settings).map_err(|e| format!("Serialization failed: {}", e))
}

/// Missing fields take their defaults; volumes are clamped into range.
pub fn settings_from_json(json: &str) -> Result<UserSettings, String> {
    let mut settings: UserSettings =
        serde_json::from_str(json).map_err(|e| format!("Deserialization failed: {}", e))?;
    settings.music_volume = settings.music_volume.clamp(0.0, 1.0);
    settings.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
    Ok(settings)
}

// ═══════════════════════════════════════════════════════════════════════
// STORAGE
// ═══════════════════════════════════════════════════════════════════════

#[cfg(not(target_arch = "wasm32"))]
fn settings_path() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));
    exe_dir.join(SETTINGS_FILE)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn write_settings_to(path: &Path, settings: &UserSettings) -> Result<(), String> {
    let json = settings_to_json(settings)?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, &json)
        .map_err(|e| format!("Write failed for {}: {}", tmp_path.display(), e))?;
    fs::rename(&tmp_path, path).map_err(|e| format!("Rename failed: {}", e))?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read_settings_from(path: &Path) -> Result<UserSettings, String> {
    if !path.exists() {
        return Err(format!("{} does not exist", path.display()));
    }
    let json = fs::read_to_string(path)
        .map_err(|e| format!("Read failed for {}: {}", path.display(), e))?;
    settings_from_json(&json)
}

#[cfg(not(target_arch = "wasm32"))]
fn write_settings(settings: &UserSettings) -> Result<(), String> {
    write_settings_to(&settings_path(), settings)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_settings() -> Result<UserSettings, String> {
    read_settings_from(&settings_path())
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .ok_or_else(|| "No window".to_string())?
        .local_storage()
        .map_err(|_| "localStorage unavailable".to_string())?
        .ok_or_else(|| "localStorage unavailable".to_string())
}

#[cfg(target_arch = "wasm32")]
fn write_settings(settings: &UserSettings) -> Result<(), String> {
    let json = settings_to_json(settings)?;
    local_storage()?
        .set_item(STORAGE_KEY, &json)
        .map_err(|_| "localStorage write failed".to_string())
}

#[cfg(target_arch = "wasm32")]
fn read_settings() -> Result<UserSettings, String> {
    let json = local_storage()?
        .get_item(STORAGE_KEY)
        .map_err(|_| "localStorage read failed".to_string())?
        .ok_or_else(|| "No stored settings".to_string())?;
    settings_from_json(&json)
}

// ═══════════════════════════════════════════════════════════════════════
// SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

fn load_settings(mut commands: Commands) {
    let settings = match read_settings() {
        Ok(settings) => {
            info!(
                "[Settings] Loaded: music {:.2}, sfx {:.2}, tutorial done: {}",
                settings.music_volume, settings.sfx_volume, settings.tutorial_completed
            );
            settings
        }
        Err(e) => {
            warn!("[Settings] Using defaults: {}", e);
            UserSettings::default()
        }
    };
    commands.insert_resource(settings);
}

/// Clamps requested volumes into [0, 1] and stores them.
pub fn apply_volume_changes(
    mut events: EventReader<VolumeChangeEvent>,
    mut settings: ResMut<UserSettings>,
) {
    for ev in events.read() {
        let volume = ev.volume.clamp(0.0, 1.0);
        match ev.channel {
            VolumeChannel::Music => settings.music_volume = volume,
            VolumeChannel::Sfx => settings.sfx_volume = volume,
        }
        info!("[Settings] {:?} volume set to {:.2}", ev.channel, volume);
    }
}

/// Up/down in the pause menu nudge the music volume.
fn adjust_music_from_pause_menu(
    input: Res<PlayerInput>,
    settings: Res<UserSettings>,
    mut writer: EventWriter<VolumeChangeEvent>,
) {
    let step = match (input.ui_up, input.ui_down) {
        (true, false) => VOLUME_STEP,
        (false, true) => -VOLUME_STEP,
        _ => return,
    };
    writer.send(VolumeChangeEvent {
        channel: VolumeChannel::Music,
        volume: settings.music_volume + step,
    });
}

/// Writes settings whenever anything changes them after startup.
fn persist_settings_on_change(settings: Res<UserSettings>) {
    if !settings.is_changed() || settings.is_added() {
        return;
    }
    if let Err(e) = write_settings(&settings) {
        warn!("[Settings] Save failed: {}", e);
    }
}
