use crate::catalog::pipeline::{self, Page};
use crate::catalog::types::{FilterCriteria, SortKey};
use crate::models::PropertyRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Source of catalog records.
///
/// The collection view only needs `list`; `query` runs the filter, sort and
/// paginate pipeline over whatever `list` returns.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Every record, in relevance order
    async fn list(&self) -> Result<Vec<PropertyRecord>>;

    /// Name of the backing source, for logs
    fn source_name(&self) -> &'static str;

    async fn query(
        &self,
        criteria: &FilterCriteria,
        sort: SortKey,
        page: usize,
        page_size: usize,
    ) -> Result<Page> {
        let records = self.list().await?;
        Ok(pipeline::run(&records, criteria, sort, page, page_size))
    }
}
