//! Configuration System
//!
//! Typed settings loading: a JSON settings file (plus an optional environment
//! overlay) is merged and bound onto compiled-in defaults. Collection-valued
//! options use [`DefaultableVec`], so a section that supplies any value
//! replaces the defaults for that field wholesale, while an absent field
//! leaves them intact.
//!
//! Note that a field present as an explicit empty array binds zero elements
//! and is therefore indistinguishable from an absent field: the defaults
//! survive in both cases.

use crate::binder;
use crate::defaultable::DefaultableVec;
use crate::error::BindError;
use crate::logging::LoggingConfig;
use serde::Serialize;
use serde_json::Value;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize)]
pub struct AppConfig {
    /// Image processing options
    pub image_processing: ImageProcessingOptions,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Image processing options
#[derive(Debug, Clone, Serialize)]
pub struct ImageProcessingOptions {
    /// Widths (in pixels) to resize source images to
    pub resize_widths: DefaultableVec<u32>,
}

impl Default for ImageProcessingOptions {
    fn default() -> Self {
        Self {
            resize_widths: DefaultableVec::from_defaults([100, 200, 400, 800]),
        }
    }
}

impl ImageProcessingOptions {
    /// Bind this options object from its parsed settings section.
    pub fn bind(&mut self, section: &Value) -> Result<(), BindError> {
        binder::bind_sequence(
            &mut self.resize_widths,
            section.get("resize_widths"),
            "image_processing.resize_widths",
        )
    }

    /// Validate image processing options
    pub fn validate(&self) -> Result<(), String> {
        if self.resize_widths.iter().any(|width| *width == 0) {
            return Err("Resize widths must be non-zero".to_string());
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    ImageProcessing(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::ImageProcessing(msg) => {
                write!(f, "Image processing: {}", msg)
            }
            ValidationError::Logging(msg) => {
                write!(f, "Logging: {}", msg)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl AppConfig {
    /// Assemble a configuration from the merged raw settings tree.
    ///
    /// Starts from compiled-in defaults and binds each present section onto
    /// them, so sections the settings omit keep their defaults.
    pub(crate) fn from_raw(raw: &Value) -> Result<Self, BindError> {
        let mut config = AppConfig::default();

        if let Some(section) = raw.get("logging") {
            config.logging =
                serde_json::from_value(section.clone()).map_err(|source| BindError::InvalidValue {
                    field: "logging".to_string(),
                    source,
                })?;
        }

        if let Some(section) = raw.get("image_processing") {
            config.image_processing.bind(section)?;
        }

        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.image_processing.validate() {
            errors.push(ValidationError::ImageProcessing(e));
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
