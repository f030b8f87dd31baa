use anyhow::Result;
use async_trait::async_trait;

use dioxus::logger::tracing::debug;

use crate::app_settings::GallerySettings;
use super::Storage;

/// Browser builds keep gallery settings for the page lifetime only.
#[derive(Debug, Default)]
pub struct Ephemeral;

#[async_trait(?Send)]
impl Storage for Ephemeral {
    async fn save_settings(&self, settings: &GallerySettings) -> Result<()> {
        debug!("not persisting gallery settings: {settings:?}");
        Ok(())
    }

    async fn load_settings(&self) -> Result<Option<GallerySettings>> {
        Ok(None)
    }
}
