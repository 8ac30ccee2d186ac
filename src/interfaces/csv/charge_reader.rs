use crate::domain::amount::MinorUnits;
use crate::error::{PaymentError, Result};
use serde::Deserialize;
use std::io::Read;

/// One input row: a charge identifier and its gross amount in minor units.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Charge {
    pub charge: String,
    pub amount: MinorUnits,
}

/// Reads charges from a CSV source with a `charge,amount` header.
///
/// Whitespace is trimmed and record lengths are flexible; a row that fails to
/// deserialize yields an `Err` without ending the stream.
pub struct ChargeReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ChargeReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes charges, so large files are streamed rather than loaded.
    pub fn charges(self) -> impl Iterator<Item = Result<Charge>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}
