pub(crate) mod parse;

use std::collections::HashSet;

use serde_json::Value;

use crate::error::{ClientError, ClientResult};
use crate::ledger::Transaction;

use parse::Page;

/// Paginated remote transaction feed: `GET {base}/{page}.json`, pages
/// 1-indexed. Requests block sequentially; no timeout is configured beyond
/// the transport defaults, and a single failed page aborts the whole load.
#[derive(Debug)]
pub struct TransactionSource {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl TransactionSource {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let http = reqwest::blocking::Client::builder().build().map_err(|err| {
            ClientError::data_source(base_url, &format!("failed to build HTTP client: {err}"))
        })?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches pages in ascending order until the number of raw records
    /// retrieved reaches the total declared by the first page. Duplicate
    /// records still count toward that total but collapse in the returned
    /// set.
    pub fn load(&self) -> ClientResult<HashSet<Transaction>> {
        let mut transactions = HashSet::new();
        let mut declared_total: Option<u64> = None;
        let mut retrieved: u64 = 0;
        // The upstream feed serves nothing at page 0.
        let mut page_index: u64 = 1;

        loop {
            let url = self.page_url(page_index);
            let page = self.fetch_page(&url)?;
            let total = *declared_total.get_or_insert(page.total_count);

            retrieved += page.records.len() as u64;
            let page_was_empty = page.records.is_empty();
            transactions.extend(page.records);

            if retrieved >= total {
                return Ok(transactions);
            }
            if page_was_empty {
                return Err(ClientError::data_source(
                    &url,
                    &format!(
                        "pagination stuck: page {page_index} returned no records with \
                         {retrieved} of {total} retrieved"
                    ),
                ));
            }
            page_index += 1;
        }
    }

    fn page_url(&self, page_index: u64) -> String {
        format!("{}/{page_index}.json", self.base_url)
    }

    fn fetch_page(&self, url: &str) -> ClientResult<Page> {
        let response = self
            .http
            .get(url)
            .send()
            .map_err(|err| ClientError::data_source(url, &err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::data_source(url, &format!("HTTP {status}")));
        }

        let body = response
            .json::<Value>()
            .map_err(|_| ClientError::data_source(url, "response body is not valid JSON"))?;
        parse::parse_page(url, &body)
    }
}
