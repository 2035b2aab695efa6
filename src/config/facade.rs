//! Config loader facade: resolves sources, merges, and binds `AppConfig`.

use super::{merge, sources, AppConfig};
use crate::error::BindError;
use config::{File, FileFormat};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Loads settings files and produces bound configuration.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from settings files under `base_dir`.
    ///
    /// Reads `appsettings.json` (required) plus an optional
    /// `appsettings.{OVERRULE_ENV}.json` overlay, then binds the merged tree
    /// onto compiled-in defaults.
    pub fn load(base_dir: &Path) -> Result<AppConfig, BindError> {
        let builder = merge::builder_with_defaults()?;
        let builder = sources::settings_file::add_to_builder(builder, base_dir)?;
        let raw: Value = builder.build()?.try_deserialize()?;
        debug!(base_dir = %base_dir.display(), "Settings merged");
        AppConfig::from_raw(&raw)
    }

    /// Load configuration from one explicit settings file.
    pub fn load_from_file(path: &Path) -> Result<AppConfig, BindError> {
        if !path.exists() {
            return Err(BindError::SettingsNotFound(path.to_path_buf()));
        }
        let builder = merge::builder_with_defaults()?
            .add_source(File::from(path).format(FileFormat::Json));
        let raw: Value = builder.build()?.try_deserialize()?;
        debug!(path = %path.display(), "Settings loaded");
        AppConfig::from_raw(&raw)
    }
}
