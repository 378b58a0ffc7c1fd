//! On-chain transactions recorded by the wallet backend.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::query::{push_filter, Filters, Pagination};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Transfer,
    Swap,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdrawal => "withdrawal",
            TransactionType::Transfer => "transfer",
            TransactionType::Swap => "swap",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Confirmed,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Confirmed => "confirmed",
            TransactionStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    pub user_id: String,
    pub from_address: String,
    pub to_address: String,
    pub amount: String,
    pub token: String,
    pub network: String,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub status: TransactionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_at: Option<DateTime<Utc>>,
}

/// Timestamp rendered the way the backend expects in query strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTime(pub DateTime<Utc>);

impl fmt::Display for QueryTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilters {
    pub search: Option<String>,
    pub status: Option<TransactionStatus>,
    pub tx_type: Option<TransactionType>,
    pub network: Option<String>,
    pub user_id: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl Filters for TransactionFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_filter(&mut pairs, "search", &self.search);
        push_filter(&mut pairs, "status", &self.status);
        push_filter(&mut pairs, "type", &self.tx_type);
        push_filter(&mut pairs, "network", &self.network);
        push_filter(&mut pairs, "userId", &self.user_id);
        push_filter(&mut pairs, "startDate", &self.start_date.map(QueryTime));
        push_filter(&mut pairs, "endDate", &self.end_date.map(QueryTime));
        pairs
    }
}

/// `GET /transactions` response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
    pub pagination: Pagination,
}

/// Mobile send: move `amount` of `token` out of one of the user's wallets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SendTransactionRequest {
    pub wallet_id: String,
    pub to_address: String,
    pub amount: String,
    pub token: String,
    pub network: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTransactionStatusRequest {
    pub status: TransactionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_filters_render_as_iso_strings() {
        let filters = TransactionFilters {
            tx_type: Some(TransactionType::Withdrawal),
            start_date: Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()),
            ..Default::default()
        };
        assert_eq!(
            filters.query_pairs(),
            vec![
                ("type", "withdrawal".to_string()),
                ("startDate", "2024-05-01T00:00:00.000Z".to_string()),
            ]
        );
    }

    #[test]
    fn test_transaction_type_field_is_renamed() {
        let tx: Transaction = serde_json::from_str(
            r#"{
                "id": "t1",
                "userId": "u1",
                "fromAddress": "0xabc",
                "toAddress": "0xdef",
                "amount": "0.5",
                "token": "ETH",
                "network": "ethereum",
                "type": "transfer",
                "status": "confirmed",
                "createdAt": "2024-05-01T00:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(tx.tx_type, TransactionType::Transfer);
        assert_eq!(tx.hash, None);
    }
}
