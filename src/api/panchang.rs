//! Panchang endpoint — single-date and batched lookups.

use std::future::Future;
use std::time::Duration;

use futures_util::future::join_all;

use crate::client::PanchangClient;
use crate::error::{PanchangError, Result};
use crate::types::calendar::{BatchResultMap, month_dates};
use crate::types::panchang::PanchangResult;
use crate::types::request::{Location, PanchangKey};

impl PanchangClient {
    /// Retrieve the Panchang for one date and location, cached for the
    /// configured "today" TTL.
    ///
    /// **Endpoint:** `GET /api/v1/panchang`
    pub async fn fetch_one(&self, key: &PanchangKey) -> Result<PanchangResult> {
        self.fetch_one_with_ttl(key, self.config().today_ttl).await
    }

    /// Retrieve the Panchang for one date and location with an explicit cache
    /// lifetime. A zero `ttl` bypasses the cache for this call's result.
    ///
    /// Non-2xx statuses, transport failures and bodies that fail schema
    /// validation all surface as errors. There is no retry.
    pub async fn fetch_one_with_ttl(
        &self,
        key: &PanchangKey,
        ttl: Duration,
    ) -> Result<PanchangResult> {
        key.validate()?;
        let url = self.request_url(key);
        self.get_cached(&url, ttl, |body| decode(body, &key.date))
            .await
    }

    /// Retrieve many dates for one location, cached for the configured
    /// calendar TTL.
    ///
    /// Dates are fetched in chunks of `batch_size`; requests within a chunk run
    /// concurrently and the next chunk starts only once every request of the
    /// previous one has settled. Failed dates are left out of the map and
    /// never fail the batch.
    pub async fn fetch_batch<S: AsRef<str>>(
        &self,
        dates: &[S],
        location: &Location,
    ) -> BatchResultMap {
        self.fetch_batch_with_ttl(dates, location, self.config().calendar_ttl)
            .await
    }

    /// [`fetch_batch`](Self::fetch_batch) with an explicit cache lifetime.
    pub async fn fetch_batch_with_ttl<S: AsRef<str>>(
        &self,
        dates: &[S],
        location: &Location,
        ttl: Duration,
    ) -> BatchResultMap {
        let mut results = BatchResultMap::new();
        if dates.is_empty() {
            return results;
        }

        let chunk_size = self.config().batch_size.max(1);
        for (n, chunk) in dates.chunks(chunk_size).enumerate() {
            tracing::debug!(chunk = n, size = chunk.len(), "fetching batch chunk");

            let settled = join_all(chunk.iter().map(|date| async move {
                let date = date.as_ref();
                let key = PanchangKey::new(date, location.clone());
                (date, self.fetch_one_with_ttl(&key, ttl).await)
            }))
            .await;

            for (date, outcome) in settled {
                match outcome {
                    Ok(result) => {
                        results.insert(date.to_owned(), result);
                    }
                    Err(e) => {
                        tracing::warn!(date, error = %e, "Panchang unavailable, leaving date out of batch");
                    }
                }
            }
        }

        tracing::info!(
            requested = dates.len(),
            fetched = results.len(),
            "Panchang batch complete"
        );
        results
    }

    /// [`fetch_batch`](Self::fetch_batch) that gives up as soon as `cancel`
    /// resolves.
    ///
    /// Requests still in flight are dropped and
    /// [`PanchangError::Cancelled`] is returned; results of chunks that had
    /// already settled are discarded with them.
    pub async fn fetch_batch_until<S, F>(
        &self,
        dates: &[S],
        location: &Location,
        cancel: F,
    ) -> Result<BatchResultMap>
    where
        S: AsRef<str>,
        F: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            _ = cancel => {
                tracing::info!(requested = dates.len(), "Panchang batch cancelled");
                Err(PanchangError::Cancelled)
            }
            results = self.fetch_batch(dates, location) => Ok(results),
        }
    }

    /// Retrieve every day of a calendar month for one location.
    pub async fn fetch_month(
        &self,
        year: i32,
        month: u32,
        location: &Location,
    ) -> Result<BatchResultMap> {
        let dates = month_dates(year, month)?;
        Ok(self.fetch_batch(&dates, location).await)
    }
}

/// Decode and validate an upstream body at the trust boundary.
fn decode(body: &[u8], expected_date: &str) -> Result<PanchangResult> {
    let result: PanchangResult = serde_json::from_slice(body)?;
    result.validate(expected_date)?;
    Ok(result)
}
