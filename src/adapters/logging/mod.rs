//! Gateway logger adapters.
//!
//! - `TracingGatewayLogger` - production sink, forwards to `tracing`
//! - `RecordingGatewayLogger` - in-memory sink for tests

mod recording_logger;
mod tracing_logger;

pub use recording_logger::RecordingGatewayLogger;
pub use tracing_logger::{describe, TracingGatewayLogger};
