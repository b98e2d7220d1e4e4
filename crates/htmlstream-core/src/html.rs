//! Trait seams between the markup layer and the streaming layer.

use std::future::Future;

use crate::StreamError;

/// Byte sink a renderer pushes serialized markup into.
///
/// Implementations may buffer; every call is a potential suspension point
/// because a full buffer is flushed to the transport before `write` returns.
pub trait HtmlSink {
    /// Write a slice of rendered bytes, preserving order across calls.
    fn write(&mut self, bytes: &[u8]) -> impl Future<Output = Result<(), StreamError>>;
}

/// A renderable HTML value: an opaque node tree that serializes itself.
///
/// `render` traverses the tree depth-first in document order and pushes each
/// node's markup into the sink as it is produced. Node serialization itself is
/// synchronous; the only suspension points are the sink writes. Any failure
/// raised by `HtmlSink::write` propagates out unchanged.
pub trait RenderHtml {
    /// Render this value into `sink`.
    fn render<S: HtmlSink>(
        &self,
        sink: &mut S,
    ) -> impl Future<Output = Result<(), StreamError>>;
}

impl RenderHtml for str {
    async fn render<S: HtmlSink>(&self, sink: &mut S) -> Result<(), StreamError> {
        sink.write(self.as_bytes()).await
    }
}

impl RenderHtml for String {
    async fn render<S: HtmlSink>(&self, sink: &mut S) -> Result<(), StreamError> {
        sink.write(self.as_bytes()).await
    }
}

impl<T: RenderHtml + ?Sized> RenderHtml for &T {
    async fn render<S: HtmlSink>(&self, sink: &mut S) -> Result<(), StreamError> {
        (**self).render(sink).await
    }
}
