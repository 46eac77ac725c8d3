//! Configuration module for SpendWise
//!
//! Display preferences and the default log filter, loaded from an optional
//! JSON settings file.

pub mod settings;

pub use settings::Settings;
