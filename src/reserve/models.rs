//! Reserve response models
//!
//! Plain field-mapping structs; every field the API may omit is optional.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Ledger
// ============================================================================

/// One side of a ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositMovement {
    /// Amount moved, as a decimal string
    pub amount: Option<String>,
    /// Currency code
    pub currency: Option<String>,
}

/// Reserve ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    /// Entry type
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Movement out of the reserve
    #[serde(rename = "out")]
    pub output: Option<DepositMovement>,
    /// Movement into the reserve
    #[serde(rename = "in")]
    pub input: Option<DepositMovement>,
    /// When the entry was created
    pub created_at: Option<DateTime<Utc>>,
    /// Transaction that produced the entry
    #[serde(rename = "TransactionId")]
    pub transaction_id: Option<String>,
}

// ============================================================================
// Transactions
// ============================================================================

/// Amount and currency a transaction was denominated in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Denomination {
    pub amount: Option<String>,
    pub currency: Option<String>,
    pub pair: Option<String>,
    pub rate: Option<String>,
}

/// Reserve transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction id
    pub id: String,
    /// Transaction type (deposit, transfer, withdrawal)
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Processing status
    pub status: Option<String>,
    /// Free-form message attached by the sender
    pub message: Option<String>,
    /// When the transaction was created
    pub created_at: Option<DateTime<Utc>>,
    pub denomination: Option<Denomination>,
}

// ============================================================================
// Statistics
// ============================================================================

/// Per-currency holdings backing a reserve currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsValue {
    pub assets: Option<String>,
    pub currency: Option<String>,
    pub liabilities: Option<String>,
    pub rate: Option<String>,
}

/// Aggregated totals for a reserve currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsTotals {
    pub commissions: Option<String>,
    pub transactions: Option<String>,
    pub assets: Option<String>,
    pub liabilities: Option<String>,
}

/// Reserve statistics for one currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveStatistics {
    /// Currency code
    pub currency: String,
    #[serde(default)]
    pub values: Vec<StatisticsValue>,
    pub totals: Option<StatisticsTotals>,
}
