use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use platform_fees::application::config::StripeConfig;
use platform_fees::domain::amount::MinorUnits;
use platform_fees::domain::fee::{DEFAULT_FEE_PERCENT, FeePolicy};
use platform_fees::infrastructure::process_env::ProcessEnv;
use platform_fees::interfaces::csv::charge_reader::ChargeReader;
use platform_fees::interfaces::csv::fee_writer::FeeReportWriter;
use platform_fees::logging;
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the platform fee for a single amount in minor units
    Fee {
        amount: u64,

        /// Fee rate as a percentage (default 10)
        #[arg(long)]
        rate: Option<Decimal>,
    },
    /// Compute fees for every charge in a `charge,amount` CSV file
    Report {
        input: PathBuf,

        /// Fee rate as a percentage (default 10)
        #[arg(long)]
        rate: Option<Decimal>,
    },
    /// Validate payment configuration from the environment and print it with keys masked
    Config {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn policy(rate: Option<Decimal>) -> Result<FeePolicy> {
    FeePolicy::from_percent(rate.unwrap_or(DEFAULT_FEE_PERCENT)).into_diagnostic()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Fee { amount, rate } => {
            let fee = policy(rate)?.fee(MinorUnits::new(amount));
            println!("{}", fee);
        }
        Command::Report { input, rate } => {
            let policy = policy(rate)?;
            let file = File::open(input).into_diagnostic()?;
            let reader = ChargeReader::new(file);

            let stdout = io::stdout();
            let mut writer = FeeReportWriter::new(stdout.lock());
            let mut written = 0usize;
            let mut skipped = 0usize;
            for charge in reader.charges() {
                match charge {
                    Ok(charge) => {
                        writer
                            .write(&charge.charge, &policy.breakdown(charge.amount))
                            .into_diagnostic()?;
                        written += 1;
                    }
                    Err(e) => {
                        warn!(error = %e, "skipping malformed charge row");
                        skipped += 1;
                    }
                }
            }
            writer.finish().into_diagnostic()?;
            info!(written, skipped, fee_bps = policy.rate_bps(), "fee report complete");
        }
        Command::Config { json } => {
            let config = StripeConfig::load(&ProcessEnv::new()).into_diagnostic()?;
            let redacted = config.redacted();
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&redacted).into_diagnostic()?
                );
            } else {
                println!("mode: {}", redacted.mode);
                println!("publishable_key: {}", redacted.publishable_key);
                println!("secret_key: {}", redacted.secret_key);
                println!("restricted: {}", redacted.restricted);
                println!("api_version: {}", redacted.api_version);
                println!("fee_percent: {}", redacted.fee_percent);
            }
        }
    }

    Ok(())
}
