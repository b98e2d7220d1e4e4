//! Core abstractions for chunked HTML response streaming.
//!
//! This crate provides the fundamental types and traits:
//! - `RenderHtml` trait - a renderable HTML value
//! - `HtmlSink` trait - the byte sink a renderer pushes markup into
//! - `StreamError` - error type shared across the streaming pipeline

mod error;
mod html;

pub use error::*;
pub use html::*;
