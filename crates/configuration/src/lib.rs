//! Configuration for connecting to the data warehouse.

pub mod client;
pub mod connection_settings;
pub mod error;

pub use client::create_client;
pub use connection_settings::ConnectionSettings;
pub use error::ConfigurationError;
