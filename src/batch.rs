//! Batch conversion over an async stream of amounts.

use tokio_stream::{Stream, StreamExt};
use tracing::debug;

use crate::{Amount, Conversion};

/// Convert every amount of the stream, in order.
pub async fn run(mut stream: impl Stream<Item = Amount> + Unpin) -> Vec<Conversion> {
    let mut conversions = Vec::new();

    while let Some(amount) = stream.next().await {
        let conversion = Conversion::new(amount);
        debug!(
            amount = %conversion.amount,
            text = %conversion.text,
            "amount converted"
        );
        conversions.push(conversion);
    }

    conversions
}
