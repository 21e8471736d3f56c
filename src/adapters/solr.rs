use crate::config::SolrConfig;
use crate::domain::model::Record;
use crate::domain::ports::{CleanupStatus, IndexClient};
use crate::utils::error::{ImportError, Result};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// HTTP client for the index update endpoint. Faceting is carried as a
/// disabled option on every submission.
pub struct SolrClient {
    base_url: Url,
    facet: bool,
    client: Client,
}

impl SolrClient {
    pub fn new(config: &SolrConfig) -> Result<Self> {
        let base_url =
            Url::parse(&config.base_url()).map_err(|e| ImportError::InvalidConfigValueError {
                field: "solr".to_string(),
                value: config.base_url(),
                reason: format!("Invalid URL format: {}", e),
            })?;

        Ok(Self {
            base_url,
            facet: false,
            client: Client::new(),
        })
    }

    fn update_url(&self, core: &str) -> Result<Url> {
        self.base_url.join(&format!("{}/update", core)).map_err(|e| {
            ImportError::InvalidConfigValueError {
                field: "core".to_string(),
                value: core.to_string(),
                reason: format!("Invalid URL format: {}", e),
            }
        })
    }
}

#[async_trait]
impl IndexClient for SolrClient {
    async fn update(&self, core: &str, records: &[Record]) -> Result<()> {
        let url = self.update_url(core)?;
        tracing::debug!(core, records = records.len(), "submitting update");

        let response = self
            .client
            .post(url)
            .query(&[
                ("commit", "true"),
                ("facet", if self.facet { "true" } else { "false" }),
            ])
            .json(records)
            .send()
            .await?;
        response.error_for_status()?;
        Ok(())
    }

    /// Delete all documents and commit. A refused connection is recorded as
    /// `Failed` instead of aborting; a delivered response counts as
    /// `Completed` whatever its status. Other transport errors propagate.
    async fn cleanup(&self, core: &str) -> Result<CleanupStatus> {
        let url = self.update_url(core)?;

        let result = self
            .client
            .get(url)
            .query(&[
                ("stream.body", "<delete><query>*:*</query></delete>"),
                ("commit", "true"),
            ])
            .send()
            .await;

        match result {
            Ok(response) => {
                tracing::debug!(core, status = %response.status(), "cleanup request delivered");
                Ok(CleanupStatus::Completed)
            }
            Err(e) if e.is_connect() => {
                tracing::warn!(core, "cleanup connection refused: {}", e);
                Ok(CleanupStatus::Failed)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer) -> SolrClient {
        SolrClient::new(&SolrConfig {
            host: server.host(),
            port: server.port(),
            application: "search".to_string(),
        })
        .unwrap()
    }

    fn record(value: serde_json::Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_update_posts_record_batch_with_commit() {
        let server = MockServer::start();
        let update_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/search/hb2_users/update")
                .query_param("commit", "true")
                .query_param("facet", "false")
                .json_body(serde_json::json!([{"id": "u1", "name": "Ada"}]));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"responseHeader": {"status": 0}}));
        });

        let client = client_for(&server);
        let batch = vec![record(serde_json::json!({"id": "u1", "name": "Ada"}))];
        client.update("hb2_users", &batch).await.unwrap();

        update_mock.assert();
    }

    #[tokio::test]
    async fn test_update_error_status_fails() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/search/hb2_users/update");
            then.status(500);
        });

        let client = client_for(&server);
        let batch = vec![record(serde_json::json!({"id": "u1"}))];
        let err = client.update("hb2_users", &batch).await.unwrap_err();
        assert!(matches!(err, ImportError::ApiError(_)));
    }

    #[tokio::test]
    async fn test_cleanup_issues_delete_all_and_commit() {
        let server = MockServer::start();
        let cleanup_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/search/hb2_users/update")
                .query_param("stream.body", "<delete><query>*:*</query></delete>")
                .query_param("commit", "true");
            then.status(200);
        });

        let client = client_for(&server);
        let status = client.cleanup("hb2_users").await.unwrap();

        cleanup_mock.assert();
        assert_eq!(status, CleanupStatus::Completed);
    }

    #[tokio::test]
    async fn test_cleanup_ignores_http_error_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search/hb2_users/update");
            then.status(500);
        });

        let client = client_for(&server);
        let status = client.cleanup("hb2_users").await.unwrap();
        assert_eq!(status, CleanupStatus::Completed);
    }

    #[tokio::test]
    async fn test_cleanup_records_refused_connection_as_failed() {
        // grab a port nothing listens on
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let client = SolrClient::new(&SolrConfig {
            host: "127.0.0.1".to_string(),
            port,
            application: "search".to_string(),
        })
        .unwrap();

        let status = client.cleanup("hb2_users").await.unwrap();
        assert_eq!(status, CleanupStatus::Failed);
    }
}
