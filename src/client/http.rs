//! `TrackerApi` over HTTP with reqwest.

use super::{ClientError, TrackerApi};
use crate::models::{Match, Player, PlayerId};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

#[derive(Clone, Debug)]
pub struct HttpTrackerApi {
    client: Client,
    base_url: String,
}

impl HttpTrackerApi {
    /// `base_url` is the server root, e.g. `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turn a non-2xx response into `ClientError::Status`, keeping the body for the log.
async fn check(res: Response) -> Result<Response, ClientError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await.unwrap_or_default();
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn json<T: DeserializeOwned>(res: Response) -> Result<T, ClientError> {
    Ok(check(res).await?.json().await?)
}

#[async_trait]
impl TrackerApi for HttpTrackerApi {
    async fn list_players(&self) -> Result<Vec<Player>, ClientError> {
        json(self.client.get(self.url("/players")).send().await?).await
    }

    async fn list_matches(&self) -> Result<Vec<Match>, ClientError> {
        json(self.client.get(self.url("/matches")).send().await?).await
    }

    async fn create_player(&self, name: &str) -> Result<Player, ClientError> {
        let res = self
            .client
            .post(self.url("/players"))
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await?;
        json(res).await
    }

    async fn delete_player(&self, id: PlayerId) -> Result<(), ClientError> {
        let res = self
            .client
            .delete(self.url("/players"))
            .query(&[("id", id)])
            .send()
            .await?;
        check(res).await?;
        Ok(())
    }

    async fn create_match(&self, winner_id: PlayerId, loser_id: PlayerId) -> Result<Match, ClientError> {
        let res = self
            .client
            .post(self.url("/matches"))
            .json(&serde_json::json!({ "winnerId": winner_id, "loserId": loser_id }))
            .send()
            .await?;
        json(res).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped() {
        let api = HttpTrackerApi::new("http://localhost:8080/");
        assert_eq!(api.url("/players"), "http://localhost:8080/players");
    }
}
