//! Decoder traits
//!
//! Defines the seam between raw response bodies and typed elements.

use crate::error::Result;

/// Trait for decoding a response body into a page of typed elements
///
/// Implementations must fail with a decode error (see
/// [`Error::is_decode`](crate::Error::is_decode)) when the body is not
/// valid or does not match the shape of `T`.
pub trait ResponseMapper<T>: Send + Sync {
    /// Decode the response body into elements, preserving their order
    fn decode(&self, body: &str) -> Result<Vec<T>>;
}

impl<T, F> ResponseMapper<T> for F
where
    F: Fn(&str) -> Result<Vec<T>> + Send + Sync,
{
    fn decode(&self, body: &str) -> Result<Vec<T>> {
        self(body)
    }
}
