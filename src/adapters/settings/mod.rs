//! Settings provider adapters.

mod static_settings;

pub use static_settings::StaticSettingsProvider;
