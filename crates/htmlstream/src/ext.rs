//! Extension for writing HTML straight into a transport sink.

use std::fmt::Display;
use std::future::Future;

use futures::Sink;
use htmlstream_core::{RenderHtml, StreamError};

use crate::ChunkedBodyWriter;

/// Adds `write_html` to any transport sink.
///
/// Renders `html` into the sink in fixed-size chunks and flushes the
/// remainder. The finish signal stays with the caller, so several values can
/// be rendered into one body before it is closed.
pub trait SinkHtmlExt<E>: Sink<Vec<u8>, Error = E> + Unpin + Sized
where
    E: Display,
{
    /// Render `html` into this sink in `chunk_size`-byte chunks.
    fn write_html<T: RenderHtml>(
        &mut self,
        html: &T,
        chunk_size: usize,
    ) -> impl Future<Output = Result<(), StreamError>> {
        async move {
            let mut writer = ChunkedBodyWriter::new(&mut *self, chunk_size)?;
            html.render(&mut writer).await?;
            writer.flush_remainder().await
        }
    }
}

impl<S, E> SinkHtmlExt<E> for S
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
}
