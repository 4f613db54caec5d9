//! Domain layer containing the gateway protocol types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (identifiers, money, query encoding, errors)
//! - `order` - Order snapshot and its status state machine
//! - `callback` - Processor callback parameters, actions and reply
//! - `payment` - Outbound redirect and gateway errors
//! - `settings` - Merchant gateway settings

pub mod callback;
pub mod foundation;
pub mod order;
pub mod payment;
pub mod settings;
