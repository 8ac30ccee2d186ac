use rand::Rng;
use std::io::Error;
use std::path::Path;

/// Writes `rows` charges with random amounts and returns the amounts in order.
pub fn generate_charges_csv(path: &Path, rows: usize) -> Result<Vec<u64>, Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["charge", "amount"])?;

    let mut rng = rand::thread_rng();
    let mut amounts = Vec::with_capacity(rows);
    for i in 1..=rows {
        let amount: u64 = rng.gen_range(0..10_000_000);
        wtr.write_record([format!("ch_{}", i), amount.to_string()])?;
        amounts.push(amount);
    }

    wtr.flush()?;
    Ok(amounts)
}
