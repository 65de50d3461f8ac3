//! Pagination module
//!
//! Supports: `Range: items=<start>-<end>` requests with `content-range` responses
//!
//! # Overview
//!
//! The pagination module turns a sequence of range-limited responses into a
//! lazily-fetched collection. [`range`] holds the pure header codec and
//! [`Paginator`] orchestrates the adapter, the codec and the response mapper.

pub mod range;

mod paginator;

pub use paginator::{PageFact, Paginator};
pub use range::{
    decode_content_range, encode_range, ContentRange, Window, CONTENT_RANGE_HEADER,
    DEFAULT_PAGE_SIZE, RANGE_HEADER,
};
