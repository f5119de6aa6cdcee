//! CKAN open-data endpoints (`package_show`, `datastore_search`)

use crate::transport::Transport;
use dp_core::{Result, DATASTORE_PAGE_SIZE};
use dp_models::open_data::{DatastoreSearchResponse, DelayRecord, PackageShowResponse};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Access to a CKAN open-data portal.
pub struct OpenDataEndpoints {
    transport: Arc<Transport>,
    base_url: String,
}

impl OpenDataEndpoints {
    /// Create a new open-data endpoints instance
    pub fn new(transport: Arc<Transport>, base_url: String) -> Self {
        Self { transport, base_url }
    }

    /// Fetch package metadata, including the resource list with
    /// `datastore_active` flags.
    #[instrument(skip(self), fields(package_id))]
    pub async fn package_show(&self, package_id: &str) -> Result<PackageShowResponse> {
        let endpoint = format!("{}/api/3/action/package_show", self.base_url);
        self.transport.get(&endpoint, &[("id", package_id)]).await
    }

    /// Fetch a single page of datastore records
    #[instrument(skip(self), fields(resource_id, limit, offset))]
    pub async fn datastore_search(
        &self,
        resource_id: &str,
        limit: i64,
        offset: i64,
    ) -> Result<DatastoreSearchResponse> {
        let endpoint = format!("{}/api/3/action/datastore_search", self.base_url);
        let limit = limit.to_string();
        let offset = offset.to_string();

        self.transport
            .get(
                &endpoint,
                &[("id", resource_id), ("limit", &limit), ("offset", &offset)],
            )
            .await
    }

    /// Fetch all records for a resource by paginating `datastore_search` in
    /// batches of [`DATASTORE_PAGE_SIZE`].
    ///
    /// Pagination stops when the cumulative offset reaches the
    /// server-reported total, a page comes back empty, or the endpoint
    /// reports failure. Transport errors mid-pagination do not propagate:
    /// the records gathered so far are returned and the truncation is
    /// logged.
    #[instrument(skip(self), fields(resource_id))]
    pub async fn datastore_records(&self, resource_id: &str) -> Result<Vec<DelayRecord>> {
        let mut records: Vec<DelayRecord> = Vec::new();
        let mut offset: i64 = 0;
        let mut total: Option<i64> = None;

        loop {
            debug!("Fetching records from offset {}", offset);
            let page = match self
                .datastore_search(resource_id, DATASTORE_PAGE_SIZE, offset)
                .await
            {
                Ok(page) => page,
                Err(e) => {
                    warn!(
                        "datastore_search failed for {} at offset {}: {}; returning {} records fetched so far",
                        resource_id,
                        offset,
                        e,
                        records.len()
                    );
                    break;
                }
            };

            if !page.success {
                warn!(
                    "datastore_search reported failure for {} at offset {}; returning {} records fetched so far",
                    resource_id,
                    offset,
                    records.len()
                );
                break;
            }

            let total = *total.get_or_insert_with(|| {
                debug!("Resource {} reports {} total records", resource_id, page.result.total);
                page.result.total
            });

            if page.result.records.is_empty() {
                break;
            }

            records.extend(page.result.records);
            offset += DATASTORE_PAGE_SIZE;
            if offset >= total {
                break;
            }
        }

        Ok(records)
    }
}
