pub mod config;
pub mod error;
pub mod i18n;
pub mod report;
pub mod resources;
pub mod telemetry;
