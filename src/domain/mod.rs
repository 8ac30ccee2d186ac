//! Domain types: amounts, fee policy, provider credentials and the ports
//! configuration is read through.

pub mod amount;
pub mod fee;
pub mod keys;
pub mod ports;
