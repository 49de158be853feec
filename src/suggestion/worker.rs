//! Completion worker thread
//!
//! Handles completion requests in a background thread to avoid blocking the
//! UI. Receives requests via channel, streams the continuation from the
//! endpoint, and forwards chunks back to the main thread. Each request carries
//! a `CancellationToken`; once it trips, the stream is dropped, which closes
//! the underlying connection.

use std::sync::mpsc::{Receiver, Sender};

use tokio_util::sync::CancellationToken;

use super::provider::{CompletionClient, CompletionError, CompletionSource};
use super::state::{CompletionRequest, CompletionResponse};
use crate::config::CompletionConfig;

/// Spawn the completion worker thread
///
/// The worker owns the HTTP client and processes one request at a time; the
/// controller guarantees at most one request is in flight.
pub fn spawn_worker(
    config: &CompletionConfig,
    request_rx: Receiver<CompletionRequest>,
    response_tx: Sender<CompletionResponse>,
) {
    let client_result = CompletionClient::from_config(config);

    std::thread::spawn(move || {
        worker_loop(client_result, request_rx, response_tx);
    });
}

/// Main worker loop - processes requests until the channel is closed
pub(crate) fn worker_loop<S: CompletionSource>(
    source_result: Result<S, CompletionError>,
    request_rx: Receiver<CompletionRequest>,
    response_tx: Sender<CompletionResponse>,
) {
    let source = match source_result {
        Ok(s) => Some(s),
        Err(e) => {
            // Not an error yet - the editor works without completions
            log::debug!("Completion source unavailable: {}", e);
            None
        }
    };

    while let Ok(request) = request_rx.recv() {
        let CompletionRequest::Generate {
            context,
            request_id,
            cancel,
        } = request;
        handle_generate(&source, &context, request_id, &cancel, &response_tx);
    }

    log::debug!("Completion worker shutting down");
}

/// Stream one continuation, checking the cancellation token between chunks
fn handle_generate<S: CompletionSource>(
    source: &Option<S>,
    context: &str,
    request_id: u64,
    cancel: &CancellationToken,
    response_tx: &Sender<CompletionResponse>,
) {
    let Some(source) = source else {
        let _ = response_tx.send(CompletionResponse::Error {
            message: "Completion not configured. Set endpoint in [completion] config."
                .to_string(),
            request_id,
        });
        return;
    };

    if cancel.is_cancelled() {
        let _ = response_tx.send(CompletionResponse::Cancelled { request_id });
        return;
    }

    match source.stream(context, cancel) {
        Ok(stream) => {
            for chunk_result in stream {
                // Returning here drops the stream and closes the connection
                if cancel.is_cancelled() {
                    let _ = response_tx.send(CompletionResponse::Cancelled { request_id });
                    log::debug!("Cancelled request {} during streaming", request_id);
                    return;
                }

                match chunk_result {
                    Ok(text) => {
                        if response_tx
                            .send(CompletionResponse::Chunk { text, request_id })
                            .is_err()
                        {
                            // Main thread disconnected, stop streaming
                            return;
                        }
                    }
                    Err(e) => {
                        let _ = response_tx.send(CompletionResponse::Error {
                            message: e.to_string(),
                            request_id,
                        });
                        return;
                    }
                }
            }
            let _ = response_tx.send(CompletionResponse::Complete { request_id });
        }
        Err(e) => {
            let _ = response_tx.send(CompletionResponse::Error {
                message: e.to_string(),
                request_id,
            });
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
