use super::models::{
    FontSize,
    Settings,
    SettingsUpdate,
};
use crate::persistence::{
    load_json_or_else,
    save_json,
    BlobStore,
    SETTINGS_KEY,
};

pub struct SettingsStore<S: BlobStore> {
    settings: Settings,
    blobs: S,
}

impl<S: BlobStore> SettingsStore<S> {
    pub fn load(blobs: S) -> Self {
        let settings = load_json_or_else(&blobs, SETTINGS_KEY, Settings::default);
        Self { settings, blobs }
    }

    pub fn get(&self) -> &Settings {
        &self.settings
    }

    pub fn update(&mut self, update: SettingsUpdate) {
        update.apply_to(&mut self.settings);
        if let Err(e) = save_json(&mut self.blobs, SETTINGS_KEY, &self.settings) {
            tracing::error!("Failed to save settings: {}", e);
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        let dark_mode = !self.settings.dark_mode;
        self.update(SettingsUpdate { dark_mode: Some(dark_mode), ..Default::default() });
    }

    pub fn toggle_auto_pronounce(&mut self) {
        let auto_pronounce = !self.settings.auto_pronounce;
        self.update(SettingsUpdate { auto_pronounce: Some(auto_pronounce), ..Default::default() });
    }

    pub fn toggle_random_order(&mut self) {
        let random_order = !self.settings.random_order;
        self.update(SettingsUpdate { random_order: Some(random_order), ..Default::default() });
    }

    pub fn set_font_size(&mut self, font_size: FontSize) {
        self.update(SettingsUpdate { font_size: Some(font_size), ..Default::default() });
    }

    pub fn blob_store(&self) -> &S {
        &self.blobs
    }
}
