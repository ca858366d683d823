//! Etherscan `account/txlist` response types.
//!
//! Successful responses carry `"status": "1"` and an array of transactions.
//! Failures carry `"status": "0"` and a string `result`, except for accounts
//! without history, which report `"No transactions found"` with an empty
//! array.
//!
//! ```json
//! {"status":"1","message":"OK","result":[{"hash":"0x..","from":"0x..","to":"0x..","value":"1000"}]}
//! ```

use serde::Deserialize;

use crate::error::LedgerError;
use crate::port::outbound::ledger::LedgerTransaction;

const NO_TRANSACTIONS: &str = "No transactions found";

#[derive(Debug, Deserialize)]
pub struct TxListResponse {
    pub status: String,
    pub message: String,
    pub result: TxListResult,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TxListResult {
    Transactions(Vec<EtherscanTransaction>),
    Message(String),
}

#[derive(Debug, Deserialize)]
pub struct EtherscanTransaction {
    pub hash: String,
    pub from: String,
    /// Empty or missing for contract creations.
    #[serde(default)]
    pub to: Option<String>,
    /// Amount in wei, as a decimal string.
    pub value: String,
}

impl EtherscanTransaction {
    fn into_ledger(self) -> Result<LedgerTransaction, LedgerError> {
        let value_wei = self.value.parse::<u128>().map_err(|e| {
            LedgerError::Decode(format!("invalid value {:?} for {}: {e}", self.value, self.hash))
        })?;
        Ok(LedgerTransaction {
            hash: self.hash,
            from: self.from,
            to: self.to.unwrap_or_default(),
            value_wei,
        })
    }
}

impl TxListResponse {
    /// Convert to ledger transactions, keeping at most `limit`.
    pub fn into_transactions(self, limit: usize) -> Result<Vec<LedgerTransaction>, LedgerError> {
        match (self.status.as_str(), self.result) {
            ("1", TxListResult::Transactions(transactions)) => transactions
                .into_iter()
                .take(limit)
                .map(EtherscanTransaction::into_ledger)
                .collect(),
            (_, TxListResult::Transactions(transactions))
                if transactions.is_empty() && self.message.starts_with(NO_TRANSACTIONS) =>
            {
                Ok(Vec::new())
            }
            (_, TxListResult::Message(detail)) => {
                Err(LedgerError::Api(format!("{}: {detail}", self.message)))
            }
            (status, TxListResult::Transactions(_)) => Err(LedgerError::Api(format!(
                "unexpected status {status:?}: {}",
                self.message
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> TxListResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn parses_transaction_list() {
        let body = r#"{"status":"1","message":"OK","result":[
            {"hash":"0xaaa","from":"0x01","to":"0x02","value":"1500000000000000000000","blockNumber":"1"},
            {"hash":"0xbbb","from":"0x03","to":"","value":"0"}
        ]}"#;

        let txs = parse(body).into_transactions(5).unwrap();

        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].value_wei, 1_500_000_000_000_000_000_000);
        assert_eq!(txs[1].to, "");
    }

    #[test]
    fn respects_limit() {
        let body = r#"{"status":"1","message":"OK","result":[
            {"hash":"0x1","from":"0x01","to":"0x02","value":"1"},
            {"hash":"0x2","from":"0x01","to":"0x02","value":"2"},
            {"hash":"0x3","from":"0x01","to":"0x02","value":"3"}
        ]}"#;

        let txs = parse(body).into_transactions(2).unwrap();

        assert_eq!(txs.len(), 2);
        assert_eq!(txs[1].hash, "0x2");
    }

    #[test]
    fn empty_history_is_not_an_error() {
        let body = r#"{"status":"0","message":"No transactions found","result":[]}"#;
        assert!(parse(body).into_transactions(5).unwrap().is_empty());
    }

    #[test]
    fn api_error_surfaces_detail() {
        let body = r#"{"status":"0","message":"NOTOK","result":"Invalid API Key"}"#;

        let err = parse(body).into_transactions(5).unwrap_err();

        assert!(matches!(err, LedgerError::Api(ref detail) if detail.contains("Invalid API Key")));
    }

    #[test]
    fn malformed_value_is_decode_error() {
        let body = r#"{"status":"1","message":"OK","result":[
            {"hash":"0x1","from":"0x01","to":"0x02","value":"lots"}
        ]}"#;

        let err = parse(body).into_transactions(5).unwrap_err();

        assert!(matches!(err, LedgerError::Decode(_)));
    }
}
