//! Per-sales-rep cache for serialized retailer listing pages.
//!
//! Entries are keyed `retailers:sr:{salesRepId}:{sha256(normalized query)}` and hold the exact
//! JSON body that was returned on the miss, so a hit can be written back byte for byte. All
//! pages of one sales rep share the `retailers:sr:{salesRepId}:` namespace, which is what gets
//! invalidated when that rep's visible data changes.

use std::time::Duration;

use moka::future::Cache;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::server::error::{internal::InternalError, AppError};

/// Prefix shared by every listing entry.
pub const RETAILER_LISTING_PREFIX: &str = "retailers:sr:";

#[derive(Clone)]
pub struct ListingCache {
    inner: Cache<String, String>,
}

impl ListingCache {
    /// Creates a cache bounded by entry count whose entries expire `ttl` after insertion.
    pub fn new(max_capacity: u64, ttl: Duration) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();

        Self { inner }
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).await
    }

    pub async fn insert(&self, key: String, body: String) {
        self.inner.insert(key, body).await;
    }

    /// Removes every entry whose key starts with `prefix`.
    ///
    /// # Returns
    /// - Number of entries removed
    pub async fn invalidate_prefix(&self, prefix: &str) -> usize {
        let keys: Vec<String> = self
            .inner
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| (*key).clone())
            .collect();

        for key in &keys {
            self.inner.invalidate(key).await;
        }

        keys.len()
    }

    /// Drops every cached page of one sales rep.
    pub async fn invalidate_sales_rep(&self, sales_rep_id: i32) {
        let removed = self
            .invalidate_prefix(&sales_rep_namespace(sales_rep_id))
            .await;

        tracing::debug!(
            "Invalidated {} cached listing page(s) for sales rep {}",
            removed,
            sales_rep_id
        );
    }

    pub async fn invalidate_sales_reps(&self, sales_rep_ids: &[i32]) {
        for sales_rep_id in sales_rep_ids {
            self.invalidate_sales_rep(*sales_rep_id).await;
        }
    }

    /// Drops the cached pages of every sales rep.
    pub async fn invalidate_all_listings(&self) {
        let removed = self.invalidate_prefix(RETAILER_LISTING_PREFIX).await;

        tracing::debug!("Invalidated {} cached listing page(s)", removed);
    }
}

/// Key prefix owning all cached pages of one sales rep.
pub fn sales_rep_namespace(sales_rep_id: i32) -> String {
    format!("{}{}:", RETAILER_LISTING_PREFIX, sales_rep_id)
}

/// Builds the cache key for a sales rep and a normalized query.
///
/// The query is serialized to JSON and fingerprinted with SHA-256 so that equal queries
/// always map to the same key regardless of their length.
pub fn listing_key<Q: Serialize>(sales_rep_id: i32, query: &Q) -> Result<String, AppError> {
    let json =
        serde_json::to_string(query).map_err(|e| InternalError::Serialize(e.to_string()))?;
    let digest = Sha256::digest(json.as_bytes());

    Ok(format!(
        "{}{}",
        sales_rep_namespace(sales_rep_id),
        hex::encode(digest)
    ))
}
