//! Reserve endpoint factories

use super::models::{Deposit, ReserveStatistics, Transaction};
use crate::decode::{JsonMapper, ResponseMapper};
use crate::error::{Error, Result};
use crate::http::{HttpAdapter, RawResponse};
use crate::pagination::{Paginator, DEFAULT_PAGE_SIZE};
use crate::types::StringMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Reserve ledger path
pub const LEDGER_PATH: &str = "/v0/reserve/ledger";

/// Reserve transactions path
pub const TRANSACTIONS_PATH: &str = "/v0/reserve/transactions";

/// Reserve statistics path
pub const STATISTICS_PATH: &str = "/v0/reserve/statistics";

/// Entry point for the public reserve endpoints
#[derive(Clone)]
pub struct Reserve {
    adapter: Arc<dyn HttpAdapter>,
    page_size: u64,
}

impl Reserve {
    /// Create a reserve handle issuing requests through `adapter`
    pub fn new(adapter: Arc<dyn HttpAdapter>) -> Self {
        Self {
            adapter,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Set the page size used by paginators created from this handle
    #[must_use]
    pub fn with_page_size(mut self, size: u64) -> Self {
        self.page_size = size.max(1);
        self
    }

    /// Page size used by paginators created from this handle
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Paginator over the reserve ledger
    pub fn get_ledger(&self) -> Paginator<Deposit> {
        self.paginate(LEDGER_PATH)
    }

    /// Paginator over all reserve transactions
    pub fn get_transactions(&self) -> Paginator<Transaction> {
        self.paginate(TRANSACTIONS_PATH)
    }

    /// Reserve statistics for every currency
    pub async fn get_statistics(&self) -> Result<Vec<ReserveStatistics>> {
        let response = self.get(STATISTICS_PATH).await?;
        JsonMapper::<ReserveStatistics>::new().decode(&response.body)
    }

    /// A single reserve transaction
    pub async fn get_transaction_by_id(&self, id: &str) -> Result<Transaction> {
        let encoded = urlencoding::encode(id);
        let response = self
            .get(&format!("{TRANSACTIONS_PATH}/{encoded}"))
            .await?;
        JsonMapper::<Transaction>::new().decode_one(&response.body)
    }

    fn paginate<T>(&self, path: &str) -> Paginator<T>
    where
        T: serde::de::DeserializeOwned + 'static,
    {
        Paginator::new(self.adapter.clone(), JsonMapper::<T>::new(), path)
            .with_page_size(self.page_size)
    }

    async fn get(&self, path: &str) -> Result<RawResponse> {
        debug!("Fetching {}", path);
        let response = self.adapter.execute(path, &StringMap::new()).await?;
        if !response.is_success() {
            return Err(Error::http_status(response.status, response.body));
        }
        Ok(response)
    }
}

impl fmt::Debug for Reserve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reserve")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}
