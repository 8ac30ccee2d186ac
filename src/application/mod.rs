//! Application layer: loads validated configuration and hands out the
//! provider handles alongside the platform fee policy.

pub mod clients;
pub mod config;
