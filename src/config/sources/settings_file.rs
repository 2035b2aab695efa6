//! Settings file sources: appsettings.json and appsettings.{env}.json

use crate::error::BindError;
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::File;
use config::FileFormat;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Path to the base settings file under `base_dir`.
pub fn base_settings_path(base_dir: &Path) -> PathBuf {
    base_dir.join("appsettings.json")
}

/// Add settings file sources to builder.
/// Precedence: appsettings.json (base, required) then
/// appsettings.{OVERRULE_ENV}.json (env-specific, optional).
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
    base_dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, BindError> {
    let base_path = base_settings_path(base_dir);
    if !base_path.exists() {
        return Err(BindError::SettingsNotFound(base_path));
    }
    builder = builder.add_source(File::from(base_path.as_path()).format(FileFormat::Json));

    if let Ok(env_name) = std::env::var("OVERRULE_ENV") {
        let env_path = base_dir.join(format!("appsettings.{}.json", env_name));
        if env_path.exists() {
            builder = builder.add_source(File::from(env_path.as_path()).format(FileFormat::Json));
        } else {
            warn!(
                settings_path = %env_path.display(),
                "Environment settings overlay not found; continuing with base settings"
            );
        }
    }

    Ok(builder)
}
