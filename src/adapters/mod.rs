//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the gateway to its surroundings:
//! - `http` - axum routes for the processor callback and checkout
//! - `logging` - gateway logger sinks (tracing, in-memory)
//! - `memory` - in-memory order repository
//! - `settings` - settings provider over configuration values

pub mod http;
pub mod logging;
pub mod memory;
pub mod settings;

pub use logging::{RecordingGatewayLogger, TracingGatewayLogger};
pub use memory::{InMemoryOrderRepository, OrderMutation};
pub use settings::StaticSettingsProvider;
