// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Uphold Client
//!
//! Async client for the Uphold reserve API.
//!
//! ## Features
//!
//! - **Range Pagination**: `Range: items=<start>-<end>` requests, `content-range` parsing
//! - **Lazy Collections**: memoized first page, total count, has-next, page advancing
//! - **Pluggable Transport**: any [`HttpAdapter`](http::HttpAdapter); reqwest by default
//! - **Pluggable Decoding**: any [`ResponseMapper`](decode::ResponseMapper); serde JSON by default
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use uphold_client::{ClientConfig, Result, UpholdClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = UpholdClient::new(ClientConfig::default())?;
//!     let mut transactions = client.reserve().get_transactions();
//!
//!     println!("{} transactions", transactions.count().await?);
//!
//!     loop {
//!         let page = transactions.get_next().await?;
//!         for transaction in &page {
//!             println!("{}", transaction.id);
//!         }
//!         if !transactions.has_next().await? {
//!             break;
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        UpholdClient                         │
//! │        reserve() → get_ledger() / get_transactions()        │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────┴───────────────────────────────┐
//! │                        Paginator<T>                         │
//! │   elements()   count()   has_next()   get_next()   pages    │
//! └──────────────┬──────────────────┬──────────────┬────────────┘
//!                │                  │              │
//! ┌──────────────┴───┐  ┌───────────┴──────┐  ┌────┴────────────┐
//! │   HttpAdapter    │  │   Range codec    │  │ ResponseMapper  │
//! │ reqwest / mock   │  │ items=0-49       │  │ serde JSON      │
//! │                  │  │ 0-49/51          │  │                 │
//! └──────────────────┘  └──────────────────┘  └─────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: document model fields before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP adapter trait and implementations
pub mod http;

/// Response decoders
pub mod decode;

/// Range-header pagination
pub mod pagination;

/// Client configuration
pub mod config;

/// Reserve endpoints and models
pub mod reserve;

/// Top-level client
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use client::UpholdClient;
pub use config::ClientConfig;
pub use pagination::{ContentRange, Paginator, Window};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
