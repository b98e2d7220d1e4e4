//! End-to-end tests: response assembly through a channel-backed transport.

use futures::channel::mpsc;
use futures::executor::block_on;
use futures::StreamExt;
use htmlstream::{
    HtmlResponse, HtmlSink, RenderHtml, ResponseHeaders, StreamError, CONTENT_TYPE_HTML,
};

/// A document of `count` empty paragraphs, serialized one node at a time the
/// way a markup renderer emits small irregular pieces.
struct Paragraphs {
    count: usize,
}

impl RenderHtml for Paragraphs {
    async fn render<S: HtmlSink>(&self, sink: &mut S) -> Result<(), StreamError> {
        for _ in 0..self.count {
            sink.write(b"<p></p>").await?;
        }
        Ok(())
    }
}

/// Drive a response body into a fresh channel, returning the flushed chunks.
fn produce_body<T: RenderHtml>(
    response: &HtmlResponse<T>,
) -> Result<Vec<Vec<u8>>, StreamError> {
    let (tx, rx) = mpsc::unbounded();
    block_on(response.write_body(tx))?;
    Ok(block_on(rx.collect()))
}

#[test]
fn test_empty_document_sets_headers_and_status() {
    let response = HtmlResponse::shareable(String::new());
    assert_eq!(response.status(), http::StatusCode::OK);
    assert_eq!(response.headers().get("content-type"), Some(CONTENT_TYPE_HTML));

    let chunks = produce_body(&response).unwrap();
    assert_eq!(chunks.concat().len(), 0);
}

#[test]
fn test_large_document_streams_in_fixed_chunks() {
    // 1000 paragraphs at 7 bytes each: 6 full 1024-byte chunks + 856 left.
    let response = HtmlResponse::new(Paragraphs { count: 1000 });
    assert_eq!(response.chunk_size(), 1024);

    let chunks = produce_body(&response).unwrap();
    assert_eq!(chunks.len(), 7);
    for chunk in &chunks[..6] {
        assert_eq!(chunk.len(), 1024);
    }
    assert_eq!(chunks[6].len(), 856);

    let expected = "<p></p>".repeat(1000);
    assert_eq!(chunks.concat(), expected.as_bytes());
}

#[test]
fn test_custom_chunk_size() {
    let response = HtmlResponse::new(Paragraphs { count: 3 })
        .with_chunk_size(4)
        .unwrap();
    let chunks = produce_body(&response).unwrap();
    assert_eq!(
        chunks,
        vec![
            b"<p><".to_vec(),
            b"/p><".to_vec(),
            b"p></".to_vec(),
            b"p><p".to_vec(),
            b"></p".to_vec(),
            b">".to_vec(),
        ]
    );
}

#[test]
fn test_zero_chunk_size_rejected_at_construction() {
    let result = HtmlResponse::new(Paragraphs { count: 1 }).with_chunk_size(0);
    assert!(matches!(result, Err(StreamError::InvalidChunkSize(0))));
}

#[test]
fn test_additional_headers_merge_with_defaults() {
    let extra: ResponseHeaders = [("foo", "bar")].into_iter().collect();
    let response = HtmlResponse::new(Paragraphs { count: 1 }).with_headers(extra);

    assert_eq!(response.headers().get("content-type"), Some(CONTENT_TYPE_HTML));
    assert_eq!(response.headers().get("foo"), Some("bar"));
    assert_eq!(response.headers().len(), 2);
}

#[test]
fn test_content_type_override_replaces_default() {
    let extra: ResponseHeaders = [("content-type", "new")].into_iter().collect();
    let response = HtmlResponse::new(Paragraphs { count: 1 }).with_headers(extra);

    assert_eq!(response.headers().get("content-type"), Some("new"));
    assert_eq!(response.headers().len(), 1);
}

#[test]
fn test_exclusive_body_produced_once() {
    let response = HtmlResponse::new(Paragraphs { count: 2 });

    let chunks = produce_body(&response).unwrap();
    assert_eq!(chunks.concat(), b"<p></p><p></p>");

    // The second production attempt must stream nothing.
    let (tx, rx) = mpsc::unbounded();
    let result = block_on(response.write_body(tx));
    assert!(matches!(result, Err(StreamError::ValueConsumed)));
    let chunks: Vec<Vec<u8>> = block_on(rx.collect());
    assert!(chunks.is_empty());
}

#[test]
fn test_shareable_body_produced_repeatedly() {
    let response = HtmlResponse::shareable("Hello".to_string());
    for _ in 0..3 {
        let chunks = produce_body(&response).unwrap();
        assert_eq!(chunks.concat(), b"Hello");
    }
}

#[test]
fn test_transport_failure_surfaces() {
    let (tx, rx) = mpsc::unbounded::<Vec<u8>>();
    drop(rx);
    let response = HtmlResponse::new(Paragraphs { count: 1000 });
    let result = block_on(response.write_body(tx));
    assert!(matches!(result, Err(StreamError::Transport(_))));
}
