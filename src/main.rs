use std::env;
use std::fmt::Display;
use std::io;
use std::process::ExitCode;

use thai_baht::csv::{read_amounts, write_conversions};
use thai_baht::{Amount, batch};
use tokio::sync::mpsc::Sender;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

/// Converted when no csv file is given.
const SAMPLES: [f64; 16] = [
    1234.0,
    33333.75,
    0.0,
    20.0,
    21.0,
    101.0,
    1001.0,
    1000001.0,
    0.01,
    0.21,
    999999.99,
    12345678.90,
    99999999.99,
    1000000000.0,
    9999999999.99,
    123456789012.34,
];

/// Forward parsed amounts to the converter, skipping the ones that failed.
async fn feed<E: Display>(
    rows: impl Iterator<Item = Result<Amount, E>>,
    sender: Sender<Amount>,
) {
    for result in rows {
        match result {
            Ok(amount) => {
                if sender.send(amount).await.is_err() {
                    return;
                }
            }
            Err(e) => {
                warn!("{e}");
            }
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse().unwrap()))
        .with_writer(io::stderr)
        .init();

    let (amount_sender, amount_receiver) = tokio::sync::mpsc::channel(16);

    match env::args().nth(1) {
        Some(path) => {
            if !path.ends_with(".csv") {
                warn!(path, "input file seems to not be a csv file");
            }
            let rows = match read_amounts(path) {
                Ok(rows) => rows,
                Err(e) => {
                    error!("{e}");
                    return ExitCode::FAILURE;
                }
            };
            tokio::spawn(feed(rows, amount_sender));
        }
        None => {
            let rows = SAMPLES.into_iter().map(Amount::from_float);
            tokio::spawn(feed(rows, amount_sender));
        }
    }

    let conversions = batch::run(ReceiverStream::new(amount_receiver)).await;

    if let Err(e) = write_conversions(io::stdout().lock(), &conversions) {
        error!("failed to write csv output: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
