use async_trait::async_trait;

use crate::modules::request_log::application::ports::incoming::use_cases::{
    BrowseRequestLogsError, BrowseRequestLogsUseCase, RequestLogPage,
};
use crate::modules::request_log::application::ports::outgoing::{RequestLogFilter, RequestLogQuery};
use crate::shared::pagination::PageRequest;

pub struct BrowseRequestLogsService<Q>
where
    Q: RequestLogQuery,
{
    query: Q,
}

impl<Q> BrowseRequestLogsService<Q>
where
    Q: RequestLogQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

fn normalize(filter: RequestLogFilter) -> RequestLogFilter {
    let clean = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());

    RequestLogFilter {
        method: clean(filter.method).map(|m| m.to_ascii_uppercase()),
        path: clean(filter.path),
        ip: clean(filter.ip),
        ..filter
    }
}

#[async_trait]
impl<Q> BrowseRequestLogsUseCase for BrowseRequestLogsService<Q>
where
    Q: RequestLogQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: RequestLogFilter,
        page: PageRequest,
    ) -> Result<RequestLogPage, BrowseRequestLogsError> {
        let filter = normalize(filter);

        let logs = self
            .query
            .list(&filter, page)
            .await
            .map_err(|e| BrowseRequestLogsError::QueryFailed(e.to_string()))?;
        let stats = self
            .query
            .stats(&filter)
            .await
            .map_err(|e| BrowseRequestLogsError::QueryFailed(e.to_string()))?;

        Ok(RequestLogPage { logs, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::request_log::application::service::test_doubles::{
        sample_view, MockRequestLogQuery,
    };

    #[tokio::test]
    async fn filters_are_normalized() {
        let service = BrowseRequestLogsService::new(MockRequestLogQuery::new(vec![]));

        service
            .execute(
                RequestLogFilter {
                    method: Some(" post ".to_string()),
                    path: Some("   ".to_string()),
                    ..Default::default()
                },
                PageRequest::default(),
            )
            .await
            .unwrap();

        let seen = service.query.last_filter.lock().unwrap().clone().unwrap();
        assert_eq!(seen.method.as_deref(), Some("POST"));
        assert_eq!(seen.path, None);
    }

    #[tokio::test]
    async fn page_carries_stats() {
        let service = BrowseRequestLogsService::new(MockRequestLogQuery::new(vec![
            sample_view(1, 200),
            sample_view(2, 404),
            sample_view(3, 500),
        ]));

        let page = service
            .execute(RequestLogFilter::default(), PageRequest::default())
            .await
            .unwrap();

        assert_eq!(page.logs.items.len(), 3);
        assert_eq!(page.stats.error_count, 2);
    }
}
