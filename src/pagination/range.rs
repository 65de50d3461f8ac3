//! Range / Content-Range codec
//!
//! Pure functions translating a [`Window`] into the outbound `Range`
//! header and a `content-range` response header back into a
//! [`ContentRange`].

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use tracing::warn;

/// Default number of elements requested per page
pub const DEFAULT_PAGE_SIZE: u64 = 50;

/// Name of the outbound range header
pub const RANGE_HEADER: &str = "Range";

/// Name of the response header describing the returned range
pub const CONTENT_RANGE_HEADER: &str = "content-range";

/// `<start>-<end>/<total>`, optionally prefixed with a unit (`items 0-2/60`).
/// A total of `*` means the server does not know the size.
static CONTENT_RANGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[A-Za-z]+\s+)?(\d+)\s*-\s*(\d+)\s*/\s*(\d+|\*)\s*$")
        .expect("Invalid content-range regex")
});

// ============================================================================
// Window
// ============================================================================

/// A contiguous slice of a remote collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    start: u64,
    size: u64,
}

impl Window {
    /// Create a window; a zero size is raised to 1
    pub fn new(start: u64, size: u64) -> Self {
        Self {
            start,
            size: size.max(1),
        }
    }

    /// Offset of the first element
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Number of elements requested, always at least 1
    pub fn size(&self) -> u64 {
        self.size
    }

    /// The first window of a collection
    pub fn first(size: u64) -> Self {
        Self::new(0, size)
    }

    /// The window immediately after this one, with the same size
    #[must_use]
    pub fn next(&self) -> Self {
        Self {
            start: self.start.saturating_add(self.size),
            size: self.size,
        }
    }

    /// Inclusive index of the last element in the window
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.size - 1)
    }

    /// Zero-based page number of this window
    pub fn index(&self) -> u64 {
        self.start / self.size
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end())
    }
}

/// Encode a window as a `Range` header value: `items=<start>-<end>`
pub fn encode_range(window: Window) -> String {
    format!("items={}-{}", window.start, window.end())
}

// ============================================================================
// ContentRange
// ============================================================================

/// Facts reported by the server about the range it returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentRange {
    /// Offset of the first returned element
    pub range_start: u64,
    /// Inclusive offset of the last returned element, if reported
    pub range_end: Option<u64>,
    /// Size of the whole collection, if reported
    pub total: Option<u64>,
}

impl ContentRange {
    /// A fact with nothing known beyond the requested start
    pub fn unknown(requested: Window) -> Self {
        Self {
            range_start: requested.start,
            range_end: None,
            total: None,
        }
    }

    /// Check if the server reported the collection size
    pub fn is_total_known(&self) -> bool {
        self.total.is_some()
    }

    /// Total element count, falling back to the number of elements returned
    pub fn count(&self, returned: usize) -> u64 {
        self.total.unwrap_or(returned as u64)
    }

    /// Whether elements exist past this range
    ///
    /// With a known total this is exact. Without one, a full page is taken
    /// to mean more data may follow; a final page that happens to be
    /// exactly `requested.size` long therefore reports `true` once too often.
    pub fn has_more(&self, returned: usize, requested: Window) -> bool {
        match self.total {
            Some(total) => {
                let end = self
                    .range_end
                    .or_else(|| (returned as u64).checked_sub(1).map(|n| self.range_start + n));
                match end {
                    Some(end) => end.saturating_add(1) < total,
                    None => self.range_start < total,
                }
            }
            None => returned as u64 == requested.size,
        }
    }
}

/// Parse a `content-range` header
///
/// Never fails: a missing or malformed header degrades to
/// [`ContentRange::unknown`] for the requested window.
pub fn decode_content_range(header: Option<&str>, requested: Window) -> ContentRange {
    let Some(value) = header else {
        return ContentRange::unknown(requested);
    };

    let parsed = CONTENT_RANGE_REGEX.captures(value).and_then(|caps| {
        let start = caps[1].parse::<u64>().ok()?;
        let end = caps[2].parse::<u64>().ok()?;
        if end < start {
            return None;
        }
        let total = match &caps[3] {
            "*" => None,
            digits => Some(digits.parse::<u64>().ok()?),
        };
        Some(ContentRange {
            range_start: start,
            range_end: Some(end),
            total,
        })
    });

    parsed.unwrap_or_else(|| {
        warn!("Ignoring malformed content-range header: {:?}", value);
        ContentRange::unknown(requested)
    })
}
