//! Access API HTTP client.

use std::future::Future;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;

use flow_transaction::{AccessApi, Address, BlockId, TransactionError};

use crate::error::AccessError;
use crate::types::{
    AccessConfig, Account, BlockHeader, BlockResponse, SendTransactionRequest,
    TransactionResponse,
};

/// HTTP client for the Flow Access API.
#[derive(Debug, Clone)]
pub struct AccessClient {
    /// Client configuration.
    config: AccessConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl AccessClient {
    /// Create a new Access API client with the given configuration.
    pub fn new(config: AccessConfig) -> Self {
        let client = reqwest::Client::new();
        Self { config, client }
    }

    /// Fetch the header of the latest sealed block.
    pub async fn latest_sealed_block(&self) -> Result<BlockHeader, AccessError> {
        let blocks: Vec<BlockResponse> = self.do_get("blocks?height=sealed").await?;
        blocks
            .into_iter()
            .next()
            .map(|b| b.header)
            .ok_or(AccessError::EmptyResponse)
    }

    /// Fetch an account with its keys expanded.
    pub async fn get_account(&self, address: &Address) -> Result<Account, AccessError> {
        let path = format!("accounts/{}?expand=keys", address.to_hex());
        self.do_get(&path).await
    }

    /// Submit a signed transaction and return its id.
    pub async fn send_transaction(
        &self,
        tx: &flow_transaction::Transaction,
    ) -> Result<String, AccessError> {
        let body = SendTransactionRequest::from_transaction(tx)?;
        let url = format!("{}/v1/transactions", self.config.base_url);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let resp = self
            .client
            .post(&url)
            .headers(headers)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(AccessError::ServerError {
                status_code: status.as_u16(),
                message,
            });
        }

        let response: TransactionResponse = resp.json().await?;
        Ok(response.id)
    }

    /// Perform a GET request against the Access API and deserialize the
    /// response.
    async fn do_get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AccessError> {
        let url = format!("{}/v1/{}", self.config.base_url, path);

        let resp = self.client.get(&url).send().await?;

        let status = resp.status();

        if status.as_u16() == 404 {
            return Err(AccessError::NotFound);
        }

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(AccessError::ServerError {
                status_code: status.as_u16(),
                message,
            });
        }

        let text = resp.text().await?;
        let parsed = serde_json::from_str(&text)?;
        Ok(parsed)
    }
}

impl AccessApi for AccessClient {
    fn latest_sealed_block_id(
        &self,
    ) -> impl Future<Output = Result<BlockId, TransactionError>> + Send {
        async move {
            let header = self
                .latest_sealed_block()
                .await
                .map_err(|e| TransactionError::Access(Box::new(e)))?;
            BlockId::from_hex(&header.id)
        }
    }

    fn account_key_sequence_number(
        &self,
        address: Address,
        key_index: u32,
    ) -> impl Future<Output = Result<u64, TransactionError>> + Send {
        async move {
            let account = self
                .get_account(&address)
                .await
                .map_err(|e| TransactionError::Access(Box::new(e)))?;

            let key = account
                .keys
                .iter()
                .find(|k| k.index.parse::<u32>().ok() == Some(key_index))
                .ok_or_else(|| {
                    TransactionError::PreparationFailed(format!(
                        "key index {} not found on account {}",
                        key_index, address
                    ))
                })?;

            key.sequence_number.parse::<u64>().map_err(|_| {
                TransactionError::Access(Box::new(AccessError::InvalidNumericField {
                    field: "sequence_number",
                    value: key.sequence_number.clone(),
                }))
            })
        }
    }
}
