//! Response decoder module
//!
//! # Overview
//!
//! The pagination engine never deserializes bodies itself. Each paginator
//! is handed a [`ResponseMapper`] at construction time; [`JsonMapper`] is the
//! serde-backed implementation used by the reserve endpoints.

mod decoders;
mod types;

pub use decoders::JsonMapper;
pub use types::ResponseMapper;
