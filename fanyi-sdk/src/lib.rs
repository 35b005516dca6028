#![doc = include_str!("../README.md")]

pub mod translate;

pub mod language;

mod locale;
pub use locale::Locale;

/// Credentials related implementations for the translation client
pub mod credentials;
