//! Chunked body writer sitting between the renderer and the transport sink.

use std::fmt::Display;
use std::mem;

use futures::{Sink, SinkExt};
use htmlstream_core::{HtmlSink, StreamError};

/// Default number of bytes per flushed chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Buffers rendered bytes and flushes them to the transport in fixed-size
/// chunks.
///
/// The renderer emits small, irregular pieces of markup per node; this writer
/// decouples that from the wire so the transport always receives uniformly
/// sized chunks, except for the final remainder. Bytes reach the sink in the
/// exact order they were written.
///
/// This is generic over the underlying sink type to work with any
/// `Sink<Vec<u8>>` implementation.
///
/// After a failed flush the writer is unusable; the buffer is not recovered
/// and no retry is attempted.
pub struct ChunkedBodyWriter<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    buffer: Vec<u8>,
    chunk_size: usize,
}

impl<S, E> ChunkedBodyWriter<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new writer flushing `chunk_size`-byte chunks into `sink`.
    ///
    /// A chunk size of zero would never trigger a flush boundary and is
    /// rejected here rather than looping at render time.
    pub fn new(sink: S, chunk_size: usize) -> Result<Self, StreamError> {
        if chunk_size == 0 {
            return Err(StreamError::InvalidChunkSize(chunk_size));
        }
        Ok(Self {
            inner: sink,
            buffer: Vec::with_capacity(chunk_size),
            chunk_size,
        })
    }

    /// Flush any buffered bytes below chunk size as one final, short write.
    ///
    /// Called once by the body producer after rendering completes; the writer
    /// never flushes a partial chunk on its own. A no-op when the buffer is
    /// empty.
    pub async fn flush_remainder(&mut self) -> Result<(), StreamError> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let remainder = mem::take(&mut self.buffer);
        self.inner
            .send(remainder)
            .await
            .map_err(|e| StreamError::Transport(e.to_string()))
    }

    /// Close the underlying sink, signalling the end of the response body.
    ///
    /// No trailing headers are sent. Buffered bytes are not flushed here;
    /// call `flush_remainder` first.
    pub async fn finish(mut self) -> Result<(), StreamError> {
        self.inner
            .close()
            .await
            .map_err(|e| StreamError::Transport(e.to_string()))
    }

    /// Number of bytes currently buffered, always below the chunk size after
    /// a successful `write`.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Get the configured chunk size.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Consume the writer and return the inner sink.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, E> HtmlSink for ChunkedBodyWriter<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    async fn write(&mut self, bytes: &[u8]) -> Result<(), StreamError> {
        self.buffer.extend_from_slice(bytes);
        while self.buffer.len() >= self.chunk_size {
            let rest = self.buffer.split_off(self.chunk_size);
            let chunk = mem::replace(&mut self.buffer, rest);
            self.inner
                .send(chunk)
                .await
                .map_err(|e| StreamError::Transport(e.to_string()))?;
        }
        Ok(())
    }
}
