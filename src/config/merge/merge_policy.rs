//! Merge rules: defaults, override order, conflict handling.
//!
//! Only scalar settings are seeded here. Collection-valued options carry
//! their defaults inside the options structs, where the binder can preserve
//! them when the settings file is silent.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.color", true)
}
