use std::io::{self, Cursor, Read};

use super::*;
use crate::config::CompletionConfig;

// =========================================================================
// Client construction
// =========================================================================

#[test]
fn test_from_config_requires_endpoint() {
    let config = CompletionConfig::default();
    let result = CompletionClient::from_config(&config);
    assert!(matches!(result, Err(CompletionError::NotConfigured(_))));
}

#[test]
fn test_from_config_rejects_blank_endpoint() {
    let config = CompletionConfig {
        endpoint: Some("   ".to_string()),
        ..CompletionConfig::default()
    };
    let result = CompletionClient::from_config(&config);
    assert!(matches!(result, Err(CompletionError::NotConfigured(_))));
}

#[test]
fn test_from_config_with_endpoint() {
    let config = CompletionConfig {
        endpoint: Some("http://localhost:8787/generate".to_string()),
        ..CompletionConfig::default()
    };
    assert!(CompletionClient::from_config(&config).is_ok());
}

// =========================================================================
// Chunk decoding
// =========================================================================

#[test]
fn test_chunks_concatenate_in_order() {
    let chunks = TextChunks::new(Cursor::new(b"turning orange slowly".to_vec()));
    let collected: String = chunks.map(|c| c.unwrap()).collect();
    assert_eq!(collected, "turning orange slowly");
}

#[test]
fn test_empty_body_yields_no_chunks() {
    let mut chunks = TextChunks::new(Cursor::new(Vec::new()));
    assert!(chunks.next().is_none());
}

/// Reader that returns its scripted slices one read() at a time
struct ScriptedReader {
    parts: Vec<Vec<u8>>,
    index: usize,
}

impl ScriptedReader {
    fn new(parts: Vec<&[u8]>) -> Self {
        Self {
            parts: parts.into_iter().map(|p| p.to_vec()).collect(),
            index: 0,
        }
    }
}

impl Read for ScriptedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.index >= self.parts.len() {
            return Ok(0);
        }
        let part = &self.parts[self.index];
        self.index += 1;
        buf[..part.len()].copy_from_slice(part);
        Ok(part.len())
    }
}

#[test]
fn test_chunk_per_read() {
    let reader = ScriptedReader::new(vec![b"turning", b" orange", b" slowly"]);
    let chunks: Vec<String> = TextChunks::new(reader).map(|c| c.unwrap()).collect();
    assert_eq!(chunks, vec!["turning", " orange", " slowly"]);
}

#[test]
fn test_multibyte_char_split_across_reads() {
    // "é" is 0xC3 0xA9; split it across two reads
    let reader = ScriptedReader::new(vec![b"caf\xC3", b"\xA9 time"]);
    let chunks: Vec<String> = TextChunks::new(reader).map(|c| c.unwrap()).collect();

    assert_eq!(chunks.concat(), "café time");
    // The lone 0xC3 must be held back, not emitted
    assert_eq!(chunks[0], "caf");
}

#[test]
fn test_incomplete_trailing_sequence_flushed_at_eof() {
    let reader = ScriptedReader::new(vec![b"ok\xE2\x82"]);
    let chunks: Vec<Result<String, CompletionError>> = TextChunks::new(reader).collect();

    // The valid prefix arrives, the dangling bytes are flushed lossily at EOF
    assert_eq!(chunks[0].as_ref().unwrap(), "ok");
    assert_eq!(chunks.len(), 2);
    assert!(chunks[1].is_ok());
}

#[test]
fn test_invalid_utf8_is_a_decode_error() {
    // 0xFF can never start a UTF-8 sequence
    let reader = ScriptedReader::new(vec![b"\xFF\xFF\xFF\xFF"]);
    let mut chunks = TextChunks::new(reader);
    assert!(matches!(
        chunks.next(),
        Some(Err(CompletionError::Decode(_)))
    ));
    // Iterator is fused after an error
    assert!(chunks.next().is_none());
}

/// Reader that fails immediately
struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
    }
}

#[test]
fn test_transport_error_surfaces_as_network() {
    let mut chunks = TextChunks::new(FailingReader);
    assert!(matches!(
        chunks.next(),
        Some(Err(CompletionError::Network(_)))
    ));
    assert!(chunks.next().is_none());
}

// =========================================================================
// Request body shape
// =========================================================================

#[test]
fn test_request_body_is_context_object() {
    let body = serde_json::json!({ "context": "The sky was" });
    assert_eq!(body["context"], "The sky was");
    assert_eq!(body.as_object().unwrap().len(), 1);
}
