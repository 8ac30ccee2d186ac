use crate::domain::fee::FeeBreakdown;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct FeeRow<'a> {
    charge: &'a str,
    amount: u64,
    fee: u64,
    net: u64,
}

/// Writes `charge,amount,fee,net` rows.
pub struct FeeReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> FeeReportWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write(&mut self, charge: &str, breakdown: &FeeBreakdown) -> Result<()> {
        self.writer.serialize(FeeRow {
            charge,
            amount: breakdown.amount.value(),
            fee: breakdown.fee.value(),
            net: breakdown.net.value(),
        })?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::amount::MinorUnits;
    use crate::domain::fee::FeePolicy;

    #[test]
    fn test_writes_header_and_rows() {
        let policy = FeePolicy::default();
        let mut out = Vec::new();
        {
            let mut writer = FeeReportWriter::new(&mut out);
            writer
                .write("ch_1", &policy.breakdown(MinorUnits::new(999)))
                .unwrap();
            writer
                .write("ch_2", &policy.breakdown(MinorUnits::new(0)))
                .unwrap();
            writer.finish().unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "charge,amount,fee,net\nch_1,999,100,899\nch_2,0,0,0\n");
    }

    #[test]
    fn test_empty_report_has_no_header() {
        let mut out = Vec::new();
        FeeReportWriter::new(&mut out).finish().unwrap();
        assert!(out.is_empty());
    }
}
