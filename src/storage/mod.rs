//! Persistence for the gallery's last-used panel options.

use async_trait::async_trait;

use crate::app_settings::GallerySettings;

#[cfg(not(target_arch = "wasm32"))]
mod file_storage;
#[cfg(target_arch = "wasm32")]
mod ephemeral;

#[cfg(not(target_arch = "wasm32"))]
pub type AppStorage = file_storage::FileStorage;
#[cfg(target_arch = "wasm32")]
pub type AppStorage = ephemeral::Ephemeral;

#[async_trait(?Send)]
pub trait Storage {
    async fn save_settings(&self, settings: &GallerySettings) -> anyhow::Result<()>;
    async fn load_settings(&self) -> anyhow::Result<Option<GallerySettings>>;
}

/// Settings file lives in the per-user config dir; no home dir is an error
/// rather than a silent fallback to the working directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn open_storage() -> anyhow::Result<AppStorage> {
    let dirs = directories_next::ProjectDirs::from("dev", "side-panel", "gallery")
        .ok_or_else(|| anyhow::anyhow!("no home directory for gallery settings"))?;
    Ok(AppStorage::new(dirs.config_dir()))
}

#[cfg(target_arch = "wasm32")]
pub fn open_storage() -> anyhow::Result<AppStorage> {
    Ok(AppStorage::default())
}
