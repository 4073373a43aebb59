//! Bridges the blocking pipelines to the async CLI.
//!
//! Key derivation is CPU-bound and takes seconds, so a pipeline runs on a
//! blocking task while progress values flow over a channel to the terminal
//! bar. The channel closes when the pipeline finishes, ending the drain
//! loop. There is no cancellation: a started operation runs to completion
//! or failure.

use crate::error::{CryptoResult, Error};
use crate::processor::Processor;
use crate::types::Processing;
use crate::ui::progress::Bar;

/// Runs one encrypt or decrypt operation, feeding the progress bar.
pub async fn run(processor: Processor, processing: Processing, data: Vec<u8>, bar: &Bar) -> CryptoResult<Vec<u8>> {
    let (tx, rx) = flume::unbounded::<f64>();

    let handle = tokio::task::spawn_blocking(move || {
        let mut report = move |fraction: f64| {
            // The receiver may be gone if the caller stopped listening;
            // progress is advisory, the operation itself continues.
            let _ = tx.send(fraction);
        };

        match processing {
            Processing::Encryption => processor.encrypt(&data, &mut report),
            Processing::Decryption => processor.decrypt(&data, &mut report),
        }
    });

    while let Ok(fraction) = rx.recv_async().await {
        bar.set_fraction(fraction);
    }

    handle.await.map_err(|e| Error::UnsupportedEnvironment(format!("worker task failed: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secret::Password;

    #[tokio::test]
    async fn test_run_roundtrip() {
        let bar = Bar::hidden();
        let container = run(Processor::new(Password::new("pw")), Processing::Encryption, b"hello worker".to_vec(), &bar).await.unwrap();

        let plaintext = run(Processor::new(Password::new("pw")), Processing::Decryption, container, &bar).await.unwrap();
        assert_eq!(plaintext, b"hello worker");
    }

    #[tokio::test]
    async fn test_run_surfaces_validation_error() {
        let bar = Bar::hidden();
        let result = run(Processor::new(Password::new("pw")), Processing::Decryption, vec![0u8; 10], &bar).await;
        assert_eq!(result, Err(Error::Validation { len: 10 }));
    }
}
