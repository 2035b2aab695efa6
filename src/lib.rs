//! Overrule: Configuration Binding with Defaultable Collections
//!
//! Typed settings loading where collection-valued options keep their
//! compiled-in defaults until an external source supplies any value, at which
//! point the defaults are discarded wholesale.

pub mod binder;
pub mod config;
pub mod defaultable;
pub mod error;
pub mod logging;
pub mod views;
