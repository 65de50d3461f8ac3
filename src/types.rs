//! Common types used throughout the Uphold client
//!
//! Shared type aliases used by the HTTP adapter and the paginator.

use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// Generic key-value map with string keys and values
///
/// Used for request and response headers.
pub type StringMap = HashMap<String, String>;
