//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the gateway and the shop that embeds it. Adapters implement these ports.
//!
//! - `OrderRepository` - look up and mutate orders by reference
//! - `SettingsProvider` - read merchant settings by key
//! - `GatewayLogger` - injected log sink for gateway events

mod gateway_logger;
mod order_repository;
mod settings_provider;

pub use gateway_logger::{GatewayEvent, GatewayLogger, LogLevel, SkipReason};
pub use order_repository::OrderRepository;
pub use settings_provider::SettingsProvider;
