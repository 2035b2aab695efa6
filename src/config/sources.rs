//! Settings file sources for the config builder.

pub mod settings_file;
