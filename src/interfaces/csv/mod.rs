//! CSV input/output for batch fee reports.

pub mod charge_reader;
pub mod fee_writer;
