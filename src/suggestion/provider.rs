//! Completion endpoint client
//!
//! Sends the full buffer as `{"context": ...}` and consumes the response body
//! as a raw plain-text stream: no framing, chunks concatenate in arrival order
//! to form the suggestion. UTF-8 sequences split across chunk boundaries are
//! held back until the remaining bytes arrive.

use std::io::Read;
use std::time::Duration;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::config::CompletionConfig;

/// Errors that can occur while fetching a continuation
#[derive(Debug, Error)]
pub enum CompletionError {
    /// No endpoint configured (completions are optional)
    #[error("Completion not configured: {0}")]
    NotConfigured(String),

    /// Network error during the request
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint returned a non-success status
    #[error("Endpoint error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Response body was not valid UTF-8 text
    #[error("Decode error: {0}")]
    Decode(String),

    /// Request was cancelled
    #[error("Request cancelled")]
    Cancelled,
}

/// Anything that can stream a continuation for a given buffer
///
/// The worker is written against this trait so tests can substitute a scripted
/// source for the HTTP client.
pub trait CompletionSource: Send + 'static {
    fn stream(
        &self,
        context: &str,
        cancel: &CancellationToken,
    ) -> Result<Box<dyn Iterator<Item = Result<String, CompletionError>> + '_>, CompletionError>;
}

/// HTTP client for the completion endpoint
#[derive(Debug)]
pub struct CompletionClient {
    endpoint: String,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl CompletionClient {
    /// Create a client from configuration
    ///
    /// Returns `NotConfigured` when no endpoint is set; the editor then runs
    /// without completions.
    pub fn from_config(config: &CompletionConfig) -> Result<Self, CompletionError> {
        let endpoint = config
            .endpoint
            .as_ref()
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| {
                CompletionError::NotConfigured(
                    "Missing endpoint in [completion] config".to_string(),
                )
            })?;

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.clone(),
            api_key: config.api_key.clone(),
            client,
        })
    }
}

impl CompletionSource for CompletionClient {
    fn stream(
        &self,
        context: &str,
        _cancel: &CancellationToken,
    ) -> Result<Box<dyn Iterator<Item = Result<String, CompletionError>> + '_>, CompletionError>
    {
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "context": context }));

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CompletionError::Api {
                code: status.as_u16(),
                message,
            });
        }

        // reqwest's blocking Response implements Read, yielding body bytes as
        // they arrive over the wire
        Ok(Box::new(TextChunks::new(response)))
    }
}

/// Iterator over UTF-8 text chunks from a byte stream
///
/// Reads whatever the transport delivers and emits the longest valid UTF-8
/// prefix each time, holding incomplete trailing sequences for the next read.
pub struct TextChunks<R: Read> {
    reader: R,
    pending: Vec<u8>,
    done: bool,
}

impl<R: Read> TextChunks<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
            done: false,
        }
    }

    /// Split the longest valid UTF-8 prefix out of `pending`
    ///
    /// Returns `Ok(None)` when the buffer holds only an incomplete trailing
    /// sequence; returns `Decode` if the bytes can never form valid UTF-8.
    fn take_utf8_prefix(&mut self) -> Result<Option<String>, CompletionError> {
        match std::str::from_utf8(&self.pending) {
            Ok(text) => {
                let text = text.to_string();
                self.pending.clear();
                if text.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(text))
                }
            }
            Err(e) => {
                // error_len() of Some means an invalid sequence, not a chunk
                // boundary - the stream is not UTF-8 text
                if e.error_len().is_some() {
                    return Err(CompletionError::Decode(
                        "response stream is not valid UTF-8".to_string(),
                    ));
                }

                let valid = e.valid_up_to();
                if valid == 0 {
                    return Ok(None);
                }

                let text = String::from_utf8_lossy(&self.pending[..valid]).into_owned();
                self.pending.drain(..valid);
                Ok(Some(text))
            }
        }
    }
}

impl<R: Read> Iterator for TextChunks<R> {
    type Item = Result<String, CompletionError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut buf = [0u8; 1024];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => {
                    // EOF terminates the suggestion; flush any held-back bytes
                    self.done = true;
                    if self.pending.is_empty() {
                        return None;
                    }
                    let text = String::from_utf8_lossy(&self.pending).into_owned();
                    self.pending.clear();
                    return Some(Ok(text));
                }
                Ok(n) => {
                    self.pending.extend_from_slice(&buf[..n]);
                    match self.take_utf8_prefix() {
                        Ok(Some(text)) => return Some(Ok(text)),
                        Ok(None) => continue,
                        Err(e) => {
                            self.done = true;
                            return Some(Err(e));
                        }
                    }
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(CompletionError::Network(e.to_string())));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
