//! Reserve endpoints
//!
//! The public reserve exposes a paginated ledger and transaction list plus
//! two plain reads. Paginated endpoints return a [`Paginator`](crate::Paginator)
//! bound to their path and model type.

mod client;
mod models;

pub use client::{Reserve, LEDGER_PATH, STATISTICS_PATH, TRANSACTIONS_PATH};
pub use models::{
    Denomination, Deposit, DepositMovement, ReserveStatistics, StatisticsTotals,
    StatisticsValue, Transaction,
};
