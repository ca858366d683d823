//! Etherscan REST client.
//!
//! Uses the multichain v2 endpoint: every request names its chain with
//! `chainid` and authenticates with `apikey`. Request URLs therefore carry the
//! credential and are never logged.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};
use url::Url;

use super::dto::TxListResponse;
use crate::domain::wallet::WalletAddress;
use crate::error::LedgerError;
use crate::port::outbound::ledger::{LedgerApi, LedgerTransaction};

/// HTTP client for the Etherscan account API.
pub struct EtherscanClient {
    http: HttpClient,
    api_url: Url,
    chain_id: u64,
    api_key: String,
}

impl EtherscanClient {
    /// Create a client for `api_url`.
    ///
    /// `timeout` bounds each HTTP request; callers may still apply a tighter
    /// bound around the whole query.
    pub fn new(
        api_url: &str,
        chain_id: u64,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LedgerError> {
        let api_url = Url::parse(api_url)?;
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err.without_url(), "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Ok(Self {
            http,
            api_url,
            chain_id,
            api_key: api_key.into(),
        })
    }

    fn txlist_url(&self, address: &WalletAddress, limit: usize) -> Url {
        let mut url = self.api_url.clone();
        url.query_pairs_mut()
            .append_pair("chainid", &self.chain_id.to_string())
            .append_pair("module", "account")
            .append_pair("action", "txlist")
            .append_pair("address", &address.to_lower_hex())
            .append_pair("startblock", "0")
            .append_pair("endblock", "99999999")
            .append_pair("page", "1")
            .append_pair("offset", &limit.to_string())
            .append_pair("sort", "desc")
            .append_pair("apikey", &self.api_key);
        url
    }
}

#[async_trait]
impl LedgerApi for EtherscanClient {
    async fn list_recent_transactions(
        &self,
        address: &WalletAddress,
        limit: usize,
    ) -> Result<Vec<LedgerTransaction>, LedgerError> {
        debug!(address = %address, limit, "Querying Etherscan txlist");

        let response = self
            .http
            .get(self.txlist_url(address, limit))
            .send()
            .await
            .map_err(|e| LedgerError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LedgerError::Status(status.as_u16()));
        }

        let body: TxListResponse = response
            .json()
            .await
            .map_err(|e| LedgerError::Decode(e.without_url().to_string()))?;
        body.into_transactions(limit)
    }

    fn provider_name(&self) -> &'static str {
        "etherscan"
    }
}
