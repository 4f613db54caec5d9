//! Order module - the shop order as the gateway sees it.

mod aggregate;
mod status;

pub use aggregate::Order;
pub use status::OrderStatus;
