//! Typed HTTP requester against the admin service's scheduled-change and
//! v2 release endpoints.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::error::AgentError;
use crate::domain::models::{ScheduledChange, V1Class, V2Release};
use crate::domain::ports::AdminClient;

#[derive(Debug, Deserialize)]
struct V1InventoryResponse {
    #[serde(default)]
    scheduled_changes: Vec<ScheduledChange>,
}

#[derive(Debug, Deserialize)]
struct V2InventoryResponse {
    #[serde(default)]
    releases: Vec<V2Release>,
}

/// `AdminClient` implementation backed by `reqwest`.
///
/// Authentication is a bearer token attached to every request; the admin
/// service's own authentication scheme is out of scope (§1 Non-goals).
pub struct HttpAdminClient {
    client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl HttpAdminClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, bearer_token: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            bearer_token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.bearer_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, AgentError> {
        let request = self.authed(self.client.get(self.url(path)));
        let response = request
            .send()
            .await
            .map_err(|source| AgentError::Transport {
                endpoint: path.to_string(),
                source,
            })?;
        let response = response
            .error_for_status()
            .map_err(|source| AgentError::Transport {
                endpoint: path.to_string(),
                source,
            })?;
        response.json::<T>().await.map_err(|source| AgentError::Structural {
            endpoint: path.to_string(),
            reason: source.to_string(),
        })
    }

    async fn post_empty(&self, path: &str) -> Result<(), AgentError> {
        let request = self.authed(self.client.post(self.url(path)));
        request
            .send()
            .await
            .map_err(|source| AgentError::Transport {
                endpoint: path.to_string(),
                source,
            })?
            .error_for_status()
            .map_err(|source| AgentError::Transport {
                endpoint: path.to_string(),
                source,
            })?;
        Ok(())
    }
}

#[async_trait]
impl AdminClient for HttpAdminClient {
    #[tracing::instrument(skip(self))]
    async fn fetch_scheduled_changes_overview(&self) -> Result<(), AgentError> {
        let request = self.authed(self.client.get(self.url("/scheduled_changes")));
        request
            .send()
            .await
            .map_err(|source| AgentError::Transport {
                endpoint: "/scheduled_changes".to_string(),
                source,
            })?
            .error_for_status()
            .map_err(|source| AgentError::Transport {
                endpoint: "/scheduled_changes".to_string(),
                source,
            })?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_v1_class(&self, class: V1Class) -> Result<Vec<ScheduledChange>, AgentError> {
        let response: V1InventoryResponse = self.get_json(class.inventory_path()).await?;
        Ok(response.scheduled_changes)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_v2_releases(&self) -> Result<Vec<V2Release>, AgentError> {
        let response: V2InventoryResponse = self.get_json("/v2/releases").await?;
        Ok(response.releases)
    }

    #[tracing::instrument(skip(self))]
    async fn enact_v1(&self, class: V1Class, sc_id: i64) -> Result<(), AgentError> {
        let path = format!("/scheduled_changes/{}/{sc_id}/enact", class.enact_segment());
        self.post_empty(&path).await
    }

    #[tracing::instrument(skip(self))]
    async fn enact_v2_release(&self, name: &str) -> Result<(), AgentError> {
        let path = format!("/v2/releases/{name}/enact");
        self.post_empty(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_scheduled_changes_overview_succeeds_on_2xx() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/scheduled_changes")
            .with_status(200)
            .create_async()
            .await;

        let client = HttpAdminClient::new(reqwest::Client::new(), server.url(), None);
        client.fetch_scheduled_changes_overview().await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn fetch_v1_class_parses_inventory_response() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/scheduled_changes/rules")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"count": 1, "scheduled_changes": [{"sc_id": 4, "when": 234}]}"#)
            .create_async()
            .await;

        let client = HttpAdminClient::new(reqwest::Client::new(), server.url(), None);
        let scs = client.fetch_v1_class(V1Class::Rules).await.unwrap();
        assert_eq!(scs.len(), 1);
        assert_eq!(scs[0].sc_id, 4);
    }

    #[tokio::test]
    async fn enact_v1_posts_to_the_expected_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/scheduled_changes/rules/4/enact")
            .with_status(200)
            .create_async()
            .await;

        let client = HttpAdminClient::new(reqwest::Client::new(), server.url(), None);
        client.enact_v1(V1Class::Rules, 4).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn transport_error_on_non_2xx_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/scheduled_changes/rules")
            .with_status(500)
            .create_async()
            .await;

        let client = HttpAdminClient::new(reqwest::Client::new(), server.url(), None);
        let err = client.fetch_v1_class(V1Class::Rules).await.unwrap_err();
        assert!(err.is_transport_like());
    }
}
