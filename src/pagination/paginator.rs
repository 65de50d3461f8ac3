//! Range-header paginator
//!
//! A [`Paginator`] walks a remote collection one [`Window`] at a time. Each
//! operation issues at most one GET through the [`HttpAdapter`], carrying a
//! single `Range: items=<start>-<end>` header, and derives the collection
//! size and "more data" status from the `content-range` response header.
//!
//! State is only committed after the awaited request and the decode have
//! both succeeded, so a failed or cancelled call leaves the paginator as it
//! was and the same page can be requested again.

use super::range::{
    decode_content_range, encode_range, ContentRange, Window, CONTENT_RANGE_HEADER,
    DEFAULT_PAGE_SIZE, RANGE_HEADER,
};
use crate::decode::ResponseMapper;
use crate::error::{Error, Result};
use crate::http::HttpAdapter;
use crate::types::StringMap;
use futures::Stream;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::OnceCell;
use tracing::debug;

/// What was learned from the last successful fetch of a window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageFact {
    /// Window that was requested
    pub window: Window,
    /// Parsed `content-range` header
    pub content_range: ContentRange,
    /// Number of decoded elements in the body
    pub returned: usize,
}

impl PageFact {
    /// Total element count, see [`ContentRange::count`]
    pub fn count(&self) -> u64 {
        self.content_range.count(self.returned)
    }

    /// Whether more elements follow, see [`ContentRange::has_more`]
    pub fn has_more(&self) -> bool {
        self.content_range.has_more(self.returned, self.window)
    }
}

#[derive(Debug, Clone, Copy)]
struct PageState {
    /// Window that `count` and `has_next` describe
    current: Window,
    /// Fact recorded for `current`, if it has been fetched
    last: Option<PageFact>,
}

impl PageState {
    fn new(page_size: u64) -> Self {
        Self {
            current: Window::first(page_size),
            last: None,
        }
    }
}

/// Lazily-fetched view over a range-paginated collection
pub struct Paginator<T> {
    adapter: Arc<dyn HttpAdapter>,
    mapper: Arc<dyn ResponseMapper<T>>,
    path: String,
    page_size: u64,
    /// Last window returned by `get_next`
    cursor: Option<Window>,
    state: Mutex<PageState>,
    first_page: OnceCell<Vec<T>>,
}

impl<T> Paginator<T> {
    /// Create a paginator over `path` with the default page size
    pub fn new<M>(adapter: Arc<dyn HttpAdapter>, mapper: M, path: impl Into<String>) -> Self
    where
        M: ResponseMapper<T> + 'static,
    {
        Self::with_mapper(adapter, Arc::new(mapper), path)
    }

    /// Create a paginator sharing an existing mapper
    pub fn with_mapper(
        adapter: Arc<dyn HttpAdapter>,
        mapper: Arc<dyn ResponseMapper<T>>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            adapter,
            mapper,
            path: path.into(),
            page_size: DEFAULT_PAGE_SIZE,
            cursor: None,
            state: Mutex::new(PageState::new(DEFAULT_PAGE_SIZE)),
            first_page: OnceCell::new(),
        }
    }

    /// Set the number of elements requested per page (at least 1)
    ///
    /// Resets the paginator to its unfetched state.
    #[must_use]
    pub fn with_page_size(mut self, size: u64) -> Self {
        self.page_size = size.max(1);
        self.cursor = None;
        self.state = Mutex::new(PageState::new(self.page_size));
        self.first_page = OnceCell::new();
        self
    }

    /// Resource path requested by this paginator
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Number of elements requested per page
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Window described by `count` and `has_next`
    pub fn current_window(&self) -> Window {
        self.lock_state().current
    }

    /// Content range recorded for the current window, if fetched
    pub fn content_range(&self) -> Option<ContentRange> {
        self.last_page().map(|fact| fact.content_range)
    }

    /// Fact recorded for the current window, if fetched
    pub fn last_page(&self) -> Option<PageFact> {
        let state = self.lock_state();
        state.last.filter(|fact| fact.window == state.current)
    }

    /// Elements of the first page
    ///
    /// The first window is fetched once per paginator; later calls return
    /// the cached elements without a request. Concurrent first calls share
    /// a single request. A failed fetch is not cached.
    pub async fn elements(&self) -> Result<&[T]> {
        let elements = self
            .first_page
            .get_or_try_init(|| async {
                let (elements, fact) = self.fetch(Window::first(self.page_size)).await?;
                self.record(fact);
                Ok::<_, Error>(elements)
            })
            .await?;
        Ok(elements.as_slice())
    }

    /// Total number of elements in the collection
    ///
    /// Uses the server-reported total when present, otherwise the number
    /// of elements in the current page.
    pub async fn count(&self) -> Result<u64> {
        Ok(self.current_fact().await?.count())
    }

    /// Whether elements exist past the current window
    ///
    /// Exact when the server reports a total. Otherwise a full page is
    /// treated as "more may follow", which is a heuristic: a final page of
    /// exactly `page_size` elements yields `true`.
    pub async fn has_next(&self) -> Result<bool> {
        Ok(self.current_fact().await?.has_more())
    }

    /// Fetch the next window
    ///
    /// The first call requests the first window; each later call requests
    /// the window right after the previous one, whatever its element
    /// count. Independent of the `elements` cache.
    pub async fn get_next(&mut self) -> Result<Vec<T>> {
        let window = self
            .cursor
            .map_or_else(|| Window::first(self.page_size), |previous| previous.next());

        let (elements, fact) = self.fetch(window).await?;

        self.cursor = Some(window);
        let state = self
            .state
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        state.current = window;
        state.last = Some(fact);

        Ok(elements)
    }

    /// Turn the paginator into a stream of pages
    ///
    /// Drives [`get_next`](Self::get_next) until a page comes back empty or
    /// [`has_next`](Self::has_next) reports `false`. An error is yielded
    /// once and ends the stream.
    pub fn into_pages(self) -> impl Stream<Item = Result<Vec<T>>> {
        futures::stream::try_unfold(Some(self), |paginator| async move {
            let Some(mut paginator) = paginator else {
                return Ok::<_, Error>(None);
            };

            let page = paginator.get_next().await?;
            if page.is_empty() {
                return Ok(None);
            }

            let more = paginator.has_next().await?;
            Ok(Some((page, more.then_some(paginator))))
        })
    }

    async fn current_fact(&self) -> Result<PageFact> {
        let window = {
            let state = self.lock_state();
            if let Some(fact) = state.last.filter(|fact| fact.window == state.current) {
                return Ok(fact);
            }
            state.current
        };

        let (_, fact) = self.fetch(window).await?;
        self.record(fact);
        Ok(fact)
    }

    async fn fetch(&self, window: Window) -> Result<(Vec<T>, PageFact)> {
        let range = encode_range(window);
        debug!("Fetching {} with range {}", self.path, range);

        let mut headers = StringMap::new();
        headers.insert(RANGE_HEADER.to_string(), range);

        let response = self.adapter.execute(&self.path, &headers).await?;
        if !response.is_success() {
            return Err(Error::http_status(response.status, response.body));
        }

        let elements = self.mapper.decode(&response.body)?;
        let content_range =
            decode_content_range(response.header_value(CONTENT_RANGE_HEADER), window);
        debug!(
            "Fetched {} elements from {} ({:?})",
            elements.len(),
            self.path,
            content_range
        );

        let fact = PageFact {
            window,
            content_range,
            returned: elements.len(),
        };
        Ok((elements, fact))
    }

    /// Store a fact if it still describes the current window
    fn record(&self, fact: PageFact) {
        let mut state = self.lock_state();
        if state.current == fact.window {
            state.last = Some(fact);
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> fmt::Debug for Paginator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("path", &self.path)
            .field("page_size", &self.page_size)
            .field("cursor", &self.cursor)
            .field("state", &*self.lock_state())
            .field("elements_cached", &self.first_page.initialized())
            .finish_non_exhaustive()
    }
}
