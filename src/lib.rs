//! SPS Gateway - redirect payment gateway for the SPS (ClicToPay) processor
//!
//! This crate hands a checkout over to the SPS payment page and reconciles
//! the processor's callbacks against the originating orders.
//!
//! The library is meant to be embedded: the shop implements
//! `ports::OrderRepository` over its own order storage and mounts
//! `adapters::http::payment_router` with that repository in
//! `PaymentAppState`.
//!
//! The `sps-gateway` binary is a wiring demo only. It starts with an empty
//! in-memory order store and has no way to load orders, so every callback
//! answers `Reponse=ERROR` and every checkout answers 404.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
