//! Chunked HTML response streaming.
//!
//! This crate adapts a renderable HTML value to an HTTP response body that is
//! streamed in fixed-size chunks:
//! - `ChunkedBodyWriter` - buffers rendered bytes, flushes bounded chunks
//! - `HtmlGuard` - single-consumption discipline for non-shareable values
//! - `ResponseHeaders` - ordered headers with a default content type
//! - `HtmlResponse` - response assembly with a deferred body producer

mod ext;
mod guard;
mod headers;
mod response;
mod writer;

pub use ext::*;
pub use guard::*;
pub use headers::*;
pub use response::*;
pub use writer::*;

pub use htmlstream_core::{HtmlSink, RenderHtml, StreamError};
