//! Suggestion lifecycle controller
//!
//! State machine over {Idle, Requesting, Streaming, Ready}. Owns the pending
//! suggestion text, its visibility flag, the idle debouncer, and the channel
//! handles for the worker thread. Responses are matched against the in-flight
//! request id so chunks from a superseded request are silently discarded.

use std::sync::mpsc::{Receiver, Sender};
use std::time::Instant;

use tokio_util::sync::CancellationToken;

use super::debouncer::IdleDebouncer;

/// Request messages sent to the completion worker thread
#[derive(Debug)]
pub enum CompletionRequest {
    /// Stream a continuation for the given buffer text
    Generate {
        context: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
        /// Cancels the stream at the transport level when tripped
        cancel: CancellationToken,
    },
}

/// Response messages received from the completion worker thread
#[derive(Debug)]
pub enum CompletionResponse {
    /// A fragment of streamed continuation text
    Chunk { text: String, request_id: u64 },
    /// The stream closed; the suggestion is complete
    Complete { request_id: u64 },
    /// The request failed; the partial suggestion must be discarded
    Error { message: String, request_id: u64 },
    /// The request was cancelled
    Cancelled { request_id: u64 },
}

/// Lifecycle phase of the current suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing pending
    Idle,
    /// Request sent, no chunk received yet
    Requesting,
    /// Chunks are accumulating
    Streaming,
    /// Stream complete, suggestion visible and acceptable
    Ready,
}

struct InFlight {
    request_id: u64,
    cancel: CancellationToken,
}

/// Suggestion state owned by the main thread
pub struct SuggestionState {
    phase: Phase,
    /// Gates whether the renderer shows the suggestion; set only on Ready
    visible: bool,
    /// Accumulated continuation text
    text: String,
    /// Monotonic id; incremented for each new request
    request_id: u64,
    in_flight: Option<InFlight>,
    debouncer: IdleDebouncer,
    request_tx: Option<Sender<CompletionRequest>>,
    response_rx: Option<Receiver<CompletionResponse>>,
}

impl SuggestionState {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            phase: Phase::Idle,
            visible: false,
            text: String::new(),
            request_id: 0,
            in_flight: None,
            debouncer: IdleDebouncer::new(debounce_ms),
            request_tx: None,
            response_rx: None,
        }
    }

    /// Wire up the channels for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<CompletionRequest>,
        response_rx: Receiver<CompletionResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The suggestion text to overlay, or None when nothing should show
    pub fn visible_text(&self) -> Option<&str> {
        if self.visible && !self.text.is_empty() {
            Some(&self.text)
        } else {
            None
        }
    }

    /// Whether a request is waiting on the worker
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// A buffer edit happened: re-arm the idle timer and drop any suggestion,
    /// since it was generated for a context that no longer exists.
    pub fn record_edit(&mut self, now: Instant) {
        self.debouncer.record_activity(now);
        self.dismiss();
    }

    /// True when the idle timer has elapsed and a request should fire
    ///
    /// The trigger is consumed either way; a blank buffer or an in-flight
    /// request suppresses it.
    pub fn should_auto_request(&mut self, now: Instant, buffer_is_blank: bool) -> bool {
        let fired = self.debouncer.poll(now);
        fired && !buffer_is_blank && self.in_flight.is_none()
    }

    /// Start a new request for the given buffer text
    ///
    /// Returns false when suppressed: blank context, a request already in
    /// flight, or no worker wired up.
    pub fn begin_request(&mut self, context: &str) -> bool {
        if context.trim().is_empty() || self.in_flight.is_some() {
            return false;
        }
        let Some(tx) = &self.request_tx else {
            return false;
        };

        self.text.clear();
        self.visible = false;
        self.request_id = self.request_id.wrapping_add(1);

        let cancel = CancellationToken::new();
        let sent = tx
            .send(CompletionRequest::Generate {
                context: context.to_string(),
                request_id: self.request_id,
                cancel: cancel.clone(),
            })
            .is_ok();

        if sent {
            self.phase = Phase::Requesting;
            self.in_flight = Some(InFlight {
                request_id: self.request_id,
                cancel,
            });
        } else {
            log::debug!("Completion worker unavailable, dropping request");
            self.phase = Phase::Idle;
        }
        sent
    }

    /// Accept the visible suggestion
    ///
    /// Returns the text to append to the buffer (a single leading space plus
    /// the suggestion), exactly once per visible suggestion.
    pub fn accept(&mut self) -> Option<String> {
        if !self.visible || self.text.is_empty() {
            return None;
        }
        let insertion = format!(" {}", self.text);
        self.text.clear();
        self.visible = false;
        self.phase = Phase::Idle;
        Some(insertion)
    }

    /// Clear the suggestion synchronously and cancel any in-flight request
    pub fn dismiss(&mut self) {
        self.text.clear();
        self.visible = false;
        self.phase = Phase::Idle;
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.cancel.cancel();
            log::debug!("Cancelled in-flight request {}", in_flight.request_id);
        }
    }

    /// Drain worker responses, ignoring anything from superseded requests
    pub fn poll_responses(&mut self) {
        let mut responses = Vec::new();
        if let Some(rx) = &self.response_rx {
            while let Ok(response) = rx.try_recv() {
                responses.push(response);
            }
        }
        for response in responses {
            self.apply_response(response);
        }
    }

    fn apply_response(&mut self, response: CompletionResponse) {
        let current = match &self.in_flight {
            Some(in_flight) => in_flight.request_id,
            // Nothing in flight: everything still in the channel is stale
            None => {
                log::debug!("Discarding response for dismissed request");
                return;
            }
        };

        match response {
            CompletionResponse::Chunk { text, request_id } => {
                if request_id != current {
                    return;
                }
                self.text.push_str(&text);
                self.phase = Phase::Streaming;
            }
            CompletionResponse::Complete { request_id } => {
                if request_id != current {
                    return;
                }
                self.in_flight = None;
                if self.text.is_empty() {
                    // Provider had nothing to offer
                    self.phase = Phase::Idle;
                } else {
                    self.phase = Phase::Ready;
                    self.visible = true;
                }
            }
            CompletionResponse::Error {
                message,
                request_id,
            } => {
                if request_id != current {
                    return;
                }
                // Swallowed: log, reset, and wait for the user to re-trigger
                log::warn!("Completion request failed: {}", message);
                self.in_flight = None;
                self.text.clear();
                self.visible = false;
                self.phase = Phase::Idle;
            }
            CompletionResponse::Cancelled { request_id } => {
                if request_id == current {
                    self.in_flight = None;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
