//! Response assembly: status, headers, and the deferred body producer.

use std::fmt::Display;

use futures::Sink;
use http::StatusCode;
use htmlstream_core::{RenderHtml, StreamError};

use crate::{ChunkedBodyWriter, HtmlGuard, ResponseHeaders, DEFAULT_CHUNK_SIZE};

/// A response that streams HTML content in chunks.
///
/// The response carries a fixed success status, a header set defaulting to
/// `content-type: text/html; charset=utf-8`, and a guarded HTML value. The
/// body is produced only when the transport invokes `write_body` with its
/// sink; nothing is rendered up front.
///
/// For a value constructed with `new`, the body can be produced exactly once.
/// A second production attempt returns an internal error and streams nothing.
pub struct HtmlResponse<T> {
    value: HtmlGuard<T>,
    chunk_size: usize,
    headers: ResponseHeaders,
}

impl<T> Clone for HtmlResponse<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            chunk_size: self.chunk_size,
            headers: self.headers.clone(),
        }
    }
}

impl<T: RenderHtml> HtmlResponse<T> {
    /// Create a response around a value that may only be rendered once.
    pub fn new(content: T) -> Self {
        Self::from_guard(HtmlGuard::exclusive(content))
    }

    /// Create a response around a value that is safe to render repeatedly.
    pub fn shareable(content: T) -> Self
    where
        T: Send + Sync,
    {
        Self::from_guard(HtmlGuard::shareable(content))
    }

    fn from_guard(value: HtmlGuard<T>) -> Self {
        Self {
            value,
            chunk_size: DEFAULT_CHUNK_SIZE,
            headers: ResponseHeaders::default(),
        }
    }

    /// Set the number of bytes to write to the response body at a time.
    ///
    /// The default is 1024 bytes. A chunk size of zero is rejected.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Result<Self, StreamError> {
        if chunk_size == 0 {
            return Err(StreamError::InvalidChunkSize(chunk_size));
        }
        self.chunk_size = chunk_size;
        Ok(self)
    }

    /// Merge additional headers into the predefined set.
    ///
    /// Headers merge by unique name; a caller-supplied content type replaces
    /// the default rather than duplicating it.
    pub fn with_headers(mut self, additional: ResponseHeaders) -> Self {
        self.headers.merge(additional);
        self
    }

    /// Add or replace a single header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Replace the whole header set, removing all predefined headers.
    pub fn set_headers(&mut self, headers: ResponseHeaders) {
        self.headers = headers;
    }

    /// The response status, always success.
    pub fn status(&self) -> StatusCode {
        StatusCode::OK
    }

    /// The response headers.
    pub fn headers(&self) -> &ResponseHeaders {
        &self.headers
    }

    /// Mutable access to the response headers.
    pub fn headers_mut(&mut self) -> &mut ResponseHeaders {
        &mut self.headers
    }

    /// The configured chunk size.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Produce the response body into the transport's sink.
    ///
    /// Takes the guarded value, renders it through a chunked writer bound to
    /// `sink`, flushes the sub-chunk-size remainder, and closes the sink with
    /// no trailing headers. Renderer and transport failures bubble up
    /// unchanged; a consumed exclusive value fails fast with
    /// `StreamError::ValueConsumed` before any bytes are written.
    pub async fn write_body<S, E>(&self, sink: S) -> Result<(), StreamError>
    where
        S: Sink<Vec<u8>, Error = E> + Unpin,
        E: Display,
    {
        let Some(html) = self.value.take() else {
            return Err(StreamError::ValueConsumed);
        };
        let mut writer = ChunkedBodyWriter::new(sink, self.chunk_size)?;
        html.render(&mut writer).await?;
        writer.flush_remainder().await?;
        writer.finish().await
    }
}
